//! Game runner - executes single games
//!
//! Level 3 - Step-level implementation

use hive_core::{GameResult, GameState, HiveError, MinimaxAI, Move, Player, RandomAI, Rules};

use crate::config::{AiConfig, PlayerType};

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Final game result
    pub result: GameResult,
    /// Number of plies played
    pub plies: u32,
    /// Move history
    pub moves: Vec<Move>,
    /// Positions searched by both players
    pub nodes: u64,
    /// The side to move had no legal move
    pub stalemate: bool,
}

impl GameOutcome {
    /// Get winner (None for draw or unfinished game)
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    /// Check if the game ended without a winner
    pub fn is_draw(&self) -> bool {
        self.winner().is_none()
    }
}

/// Game runner that plays games between two configured players
pub struct GameRunner {
    white: AiConfig,
    black: AiConfig,
    rules: Rules,
    max_plies: u32,
    /// Random seed counter
    seed_counter: u64,
}

impl GameRunner {
    /// Create a new game runner
    pub fn new(white: AiConfig, black: AiConfig, rules: Rules, max_plies: u32) -> Self {
        Self {
            white,
            black,
            rules,
            max_plies,
            seed_counter: 42,
        }
    }

    /// Play a single game, returning the outcome
    pub fn play_game(&mut self) -> Result<GameOutcome, HiveError> {
        let seed = self.next_seed();
        play_game(&self.white, &self.black, self.rules, self.max_plies, seed)
    }

    /// Get next seed and increment counter
    fn next_seed(&mut self) -> u64 {
        let seed = self.seed_counter;
        self.seed_counter = self.seed_counter.wrapping_add(1);
        seed
    }

    /// Reset seed counter
    pub fn reset_seed(&mut self, seed: u64) {
        self.seed_counter = seed;
    }
}

/// Play a game from an empty board between two AI configs.
///
/// Ends on a decided result, when the side to move has no legal move, or
/// after `max_plies`.
pub fn play_game(
    white_config: &AiConfig,
    black_config: &AiConfig,
    rules: Rules,
    max_plies: u32,
    seed: u64,
) -> Result<GameOutcome, HiveError> {
    let mut state = GameState::with_rules(rules);
    let mut moves = Vec::new();
    let mut nodes = 0u64;
    let mut stalemate = false;

    let mut white_ai = create_ai(white_config, seed);
    let mut black_ai = create_ai(black_config, seed.wrapping_add(1));

    while state.result() == GameResult::Ongoing && state.ply() < max_plies {
        let player = state.current_player();
        let ai = match player {
            Player::White => &mut white_ai,
            Player::Black => &mut black_ai,
        };

        let (mv, searched) = get_ai_move(ai, &state)?;
        nodes += searched;

        match mv {
            Some(m) => {
                tracing::debug!(ply = state.ply(), player = %player, nodes = searched, "{}", m);
                state.apply_move(m)?;
                moves.push(m);
            }
            None => {
                tracing::warn!(ply = state.ply(), player = %player, "no legal move, ending game");
                stalemate = true;
                break;
            }
        }
    }

    Ok(GameOutcome {
        result: state.result(),
        plies: state.ply(),
        moves,
        nodes,
        stalemate,
    })
}

/// AI wrapper enum for asymmetric play
enum AiPlayer {
    Minimax(MinimaxAI),
    Random(RandomAI),
}

/// Create an AI player from config; a configured seed offsets the game seed
fn create_ai(config: &AiConfig, seed: u64) -> AiPlayer {
    let seed = config.seed.map_or(seed, |s| s.wrapping_add(seed));
    match config.player_type {
        PlayerType::Minimax => AiPlayer::Minimax(MinimaxAI::new(config.depth)),
        PlayerType::Random => AiPlayer::Random(RandomAI::with_seed(seed)),
    }
}

/// Get move from AI player, with the number of positions searched
fn get_ai_move(ai: &mut AiPlayer, state: &GameState) -> Result<(Option<Move>, u64), HiveError> {
    match ai {
        AiPlayer::Minimax(minimax) => {
            let result = minimax.search(state)?;
            Ok((result.best_move, result.nodes))
        }
        AiPlayer::Random(random) => Ok((random.best_move(state), 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_game_progresses() {
        let outcome = play_game(&AiConfig::random(), &AiConfig::random(), Rules::default(), 30, 5).unwrap();
        assert!(outcome.plies > 0);
        assert_eq!(outcome.moves.len() as u32, outcome.plies);
        assert!(outcome.plies <= 30);
        assert_eq!(outcome.nodes, 0);
    }

    #[test]
    fn test_games_are_reproducible() {
        let a = play_game(&AiConfig::random(), &AiConfig::random(), Rules::default(), 40, 11).unwrap();
        let b = play_game(&AiConfig::random(), &AiConfig::random(), Rules::default(), 40, 11).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.result, b.result);
    }

    #[test]
    fn test_minimax_game_counts_nodes() {
        let outcome = play_game(&AiConfig::minimax(1), &AiConfig::random(), Rules::default(), 6, 3).unwrap();
        assert_eq!(outcome.plies, 6);
        assert!(outcome.nodes > 0);
    }

    #[test]
    fn test_game_outcome_winner() {
        let outcome = GameOutcome {
            result: GameResult::WhiteWins,
            plies: 30,
            moves: vec![],
            nodes: 0,
            stalemate: false,
        };
        assert_eq!(outcome.winner(), Some(Player::White));
        assert!(!outcome.is_draw());

        let draw = GameOutcome {
            result: GameResult::Ongoing,
            ..outcome
        };
        assert_eq!(draw.winner(), None);
        assert!(draw.is_draw());
    }

    #[test]
    fn test_configured_seed_varies_with_game_seed() {
        let seeded = AiConfig::random().with_seed(3);
        let a = play_game(&seeded, &seeded, Rules::default(), 40, 100).unwrap();
        let b = play_game(&seeded, &seeded, Rules::default(), 40, 200).unwrap();
        let c = play_game(&seeded, &seeded, Rules::default(), 40, 100).unwrap();
        assert_ne!(a.moves, b.moves);
        assert_eq!(a.moves, c.moves);
    }

    #[test]
    fn test_runner_advances_seed() {
        let mut runner = GameRunner::new(AiConfig::random(), AiConfig::random(), Rules::default(), 20);
        let first = runner.play_game().unwrap();
        let second = runner.play_game().unwrap();
        runner.reset_seed(42);
        let replay = runner.play_game().unwrap();
        assert_eq!(first.moves, replay.moves);
        assert!(!second.moves.is_empty());
    }
}
