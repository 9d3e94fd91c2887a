//! Position evaluation

use crate::game::{GameResult, GameState, Player};
use crate::win::queen_liberties;

/// Search score, higher is better for the searching player
pub type Score = i32;

/// Score of a decided game for the winner
pub const WIN_VALUE: Score = 1;

/// Liberties credited to a queen that is still in hand: none, the worst case
/// for its owner.
pub const UNPLACED_QUEEN_LIBERTIES: usize = 0;

/// Queen mobility: free cells around `player`'s queen minus free cells around
/// the opponent's.
pub fn evaluate(state: &GameState, player: Player) -> Score {
    let own = queen_liberties(state, player).unwrap_or(UNPLACED_QUEEN_LIBERTIES);
    let other = queen_liberties(state, player.opponent()).unwrap_or(UNPLACED_QUEEN_LIBERTIES);
    own as Score - other as Score
}

/// Score of a decided game from `player`'s perspective, `None` while ongoing
pub fn terminal_score(result: GameResult, player: Player) -> Option<Score> {
    match result {
        GameResult::Ongoing => None,
        GameResult::Draw => Some(0),
        decided => Some(if decided.winner() == Some(player) {
            WIN_VALUE
        } else {
            -WIN_VALUE
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::Hex;
    use crate::pieces::TileKind;

    fn two_queens() -> GameState {
        GameState::from_tiles(
            &[
                (Hex::ORIGIN, Player::White, TileKind::Queen),
                (Hex::ORIGIN.neighbor(0), Player::Black, TileKind::Queen),
                (Hex::ORIGIN.neighbor(0).neighbor(0), Player::Black, TileKind::Ant),
            ],
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate_queen_mobility() {
        let game = two_queens();
        // White queen touches one tile, black queen touches two
        assert_eq!(evaluate(&game, Player::White), 5 - 4);
        assert_eq!(evaluate(&game, Player::Black), 4 - 5);
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let game = two_queens();
        assert_eq!(evaluate(&game, Player::White), -evaluate(&game, Player::Black));
    }

    #[test]
    fn test_unplaced_queen_counts_as_no_liberties() {
        let game = GameState::from_tiles(
            &[
                (Hex::ORIGIN, Player::White, TileKind::Queen),
                (Hex::ORIGIN.neighbor(0), Player::Black, TileKind::Ant),
            ],
            2,
        )
        .unwrap();
        assert_eq!(evaluate(&game, Player::White), 5);
        assert_eq!(evaluate(&game, Player::Black), -5);
        assert_eq!(evaluate(&GameState::new(), Player::White), 0);
    }

    #[test]
    fn test_terminal_score() {
        assert_eq!(terminal_score(GameResult::Ongoing, Player::White), None);
        assert_eq!(terminal_score(GameResult::WhiteWins, Player::White), Some(WIN_VALUE));
        assert_eq!(terminal_score(GameResult::WhiteWins, Player::Black), Some(-WIN_VALUE));
        assert_eq!(terminal_score(GameResult::Draw, Player::Black), Some(0));
    }
}
