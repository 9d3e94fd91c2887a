//! Legal move generation

use rustc_hash::FxHashSet;

use crate::game::{GameState, Hand, Move};
use crate::hex::Hex;
use crate::hive::one_hive;
use crate::pieces::TileKind;

impl GameState {
    /// Generate all legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        available_moves(self)
    }
}

/// All legal moves for the side to move.
///
/// Placements come first (kind-major in hand order, then ascending cell),
/// followed by relocations (ascending origin, then ascending destination).
pub fn available_moves(state: &GameState) -> Vec<Move> {
    let player = state.current_player();
    let hand = state.hand(player);
    let board = state.board();

    // Opening: anything in hand goes to the origin
    if board.is_empty() {
        return enumerate_hand(hand, &[Hex::ORIGIN]);
    }

    // Reply: anything in hand next to the lone tile
    if board.len() == 1 {
        return match board.keys().next() {
            Some(start) => enumerate_hand(hand, &start.neighbours()),
            None => Vec::new(),
        };
    }

    let placements = placeable(state);
    let queen_in_hand = hand.contains(TileKind::Queen);

    if queen_in_hand && state.round() + 1 == state.rules().queen_deadline_round {
        return placements
            .into_iter()
            .map(|at| Move::Place { tile: TileKind::Queen, at })
            .collect();
    }

    let mut moves = enumerate_hand(hand, &placements);
    if queen_in_hand && state.rules().queen_before_movement {
        return moves;
    }
    moves.extend(movements(state));
    moves
}

/// Cells where the side to move may place a tile, ascending.
///
/// A new tile must touch the mover's own tiles and no opposing tile.
pub fn placeable(state: &GameState) -> Vec<Hex> {
    let player = state.current_player();
    let mut own = FxHashSet::default();
    let mut others = FxHashSet::default();

    for (hex, piece) in state.pieces() {
        if piece.owner == player {
            own.extend(hex.neighbours());
        } else {
            others.extend(hex.neighbours());
        }
    }

    let mut cells: Vec<Hex> = own
        .into_iter()
        .filter(|c| !others.contains(c) && !state.is_occupied(*c))
        .collect();
    cells.sort_unstable();
    cells
}

/// Relocations of the mover's tiles that keep the hive in one piece
pub fn movements(state: &GameState) -> Vec<Move> {
    let player = state.current_player();
    let board = state.board();
    let occupied: FxHashSet<Hex> = board.keys().copied().collect();

    let mut origins: Vec<_> = state.pieces().filter(|(_, p)| p.owner == player).collect();
    origins.sort_unstable_by_key(|(hex, _)| *hex);

    let mut moves = Vec::new();
    for (from, piece) in origins {
        let mut rest = occupied.clone();
        rest.remove(&from);
        if !one_hive(&rest) {
            continue;
        }
        for to in piece.kind.destinations(from, board) {
            moves.push(Move::Relocate { from, to });
        }
    }
    moves
}

/// Every kind left in `hand` at every cell of `cells`
fn enumerate_hand(hand: &Hand, cells: &[Hex]) -> Vec<Move> {
    hand.available()
        .flat_map(|tile| cells.iter().map(move |&at| Move::Place { tile, at }))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crate::rules::Rules;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn occupied_after(state: &GameState, from: Hex, to: Hex) -> FxHashSet<Hex> {
        let mut cells: FxHashSet<Hex> = state.board().keys().copied().collect();
        cells.remove(&from);
        cells.insert(to);
        cells
    }

    #[test]
    fn test_first_move_is_at_origin() {
        let game = GameState::new();
        let moves = available_moves(&game);
        assert_eq!(moves.len(), 5);
        for mv in &moves {
            assert!(matches!(mv, Move::Place { at, .. } if *at == Hex::ORIGIN));
        }
    }

    #[test]
    fn test_second_move_touches_lone_tile() {
        let mut game = GameState::new();
        game.apply_move(Move::Place { tile: TileKind::Spider, at: Hex::ORIGIN }).unwrap();
        let moves = available_moves(&game);
        assert_eq!(moves.len(), 5 * 6);
        let ring = Hex::ORIGIN.neighbours();
        for mv in &moves {
            match mv {
                Move::Place { at, .. } => assert!(ring.contains(at)),
                Move::Relocate { .. } => panic!("unexpected relocation {}", mv),
            }
        }
    }

    #[test]
    fn test_first_move_skips_exhausted_kinds() {
        let mut game = GameState::new();
        game.apply_move(Move::Place { tile: TileKind::Queen, at: Hex::ORIGIN }).unwrap();
        game.apply_move(Move::Place { tile: TileKind::Queen, at: Hex::new(0, -1, 1) }).unwrap();
        let moves = available_moves(&game);
        assert!(moves
            .iter()
            .all(|mv| !matches!(mv, Move::Place { tile: TileKind::Queen, .. })));
    }

    #[test]
    fn test_placement_avoids_opponent() {
        let game = GameState::from_tiles(
            &[
                (Hex::ORIGIN, Player::White, TileKind::Queen),
                (Hex::new(0, -1, 1), Player::Black, TileKind::Queen),
            ],
            2,
        )
        .unwrap();
        let cells = placeable(&game);
        // Three cells of white's ring touch neither black nor the occupied cell
        assert_eq!(cells.len(), 3);
        for c in &cells {
            assert!(c.neighbours().contains(&Hex::ORIGIN));
            assert!(!c.neighbours().contains(&Hex::new(0, -1, 1)));
        }
    }

    #[test]
    fn test_forced_queen_entry() {
        let game = GameState::from_tiles(
            &[
                (Hex::ORIGIN, Player::White, TileKind::Ant),
                (Hex::new(0, 1, -1), Player::White, TileKind::Spider),
                (Hex::new(0, 2, -2), Player::White, TileKind::Ant),
                (Hex::new(0, -1, 1), Player::Black, TileKind::Queen),
                (Hex::new(0, -2, 2), Player::Black, TileKind::Ant),
                (Hex::new(0, -3, 3), Player::Black, TileKind::Spider),
            ],
            6,
        )
        .unwrap();
        assert_eq!(game.round() + 1, 4);
        let moves = available_moves(&game);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(matches!(mv, Move::Place { tile: TileKind::Queen, .. }), "{}", mv);
        }
    }

    #[test]
    fn test_cut_vertex_cannot_move() {
        let game = GameState::from_tiles(
            &[
                (Hex::ORIGIN, Player::White, TileKind::Queen),
                (Hex::new(0, -1, 1), Player::Black, TileKind::Queen),
                (Hex::new(0, 1, -1), Player::White, TileKind::Ant),
            ],
            4,
        )
        .unwrap();
        let relocations = movements(&game);
        assert!(!relocations.is_empty());
        for mv in &relocations {
            assert!(matches!(mv, Move::Relocate { from, .. } if *from == Hex::new(0, 1, -1)));
        }
    }

    #[test]
    fn test_queen_before_movement_rule() {
        let tiles = [
            (Hex::ORIGIN, Player::White, TileKind::Ant),
            (Hex::new(0, -1, 1), Player::Black, TileKind::Ant),
        ];
        let mut relaxed = GameState::from_tiles(&tiles, 2).unwrap();
        relaxed.apply_move(Move::Place { tile: TileKind::Spider, at: Hex::new(0, 1, -1) }).unwrap();
        relaxed.apply_move(Move::Place { tile: TileKind::Spider, at: Hex::new(0, -2, 2) }).unwrap();
        assert!(available_moves(&relaxed).iter().any(|m| matches!(m, Move::Relocate { .. })));

        let mut strict = GameState::with_rules(Rules::strict());
        for (hex, _, kind) in tiles {
            strict.apply_move(Move::Place { tile: kind, at: hex }).unwrap();
        }
        strict.apply_move(Move::Place { tile: TileKind::Spider, at: Hex::new(0, 1, -1) }).unwrap();
        strict.apply_move(Move::Place { tile: TileKind::Spider, at: Hex::new(0, -2, 2) }).unwrap();
        let moves = available_moves(&strict);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| matches!(m, Move::Place { .. })));
    }

    #[test]
    fn test_random_games_keep_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let mut game = GameState::new();
            for _ in 0..40 {
                let moves = available_moves(&game);
                for mv in &moves {
                    if let Move::Relocate { from, to } = *mv {
                        assert!(one_hive(&occupied_after(&game, from, to)), "{} splits the hive", mv);
                    }
                }
                let Some(&mv) = moves.choose(&mut rng) else { break };
                game.apply_move(mv).unwrap();

                let cells: FxHashSet<Hex> = game.board().keys().copied().collect();
                assert!(one_hive(&cells));
                for player in Player::ALL {
                    for kind in TileKind::ALL {
                        let left = game.hand(player).count(kind) as usize;
                        assert_eq!(left + game.placed_count(player, kind), kind.starting_count() as usize);
                    }
                }
            }
        }
    }
}
