//! Win detection: a queen with all six neighbours occupied is lost

use crate::game::{GameResult, GameState, Player};
use crate::hex::Hex;
use crate::pieces::TileKind;

/// Where `player`'s queen is, if it has been placed
pub fn queen_position(state: &GameState, player: Player) -> Option<Hex> {
    state
        .pieces()
        .find(|(_, piece)| piece.owner == player && piece.kind == TileKind::Queen)
        .map(|(hex, _)| hex)
}

/// Empty cells around `player`'s queen, `None` while it is in hand
pub fn queen_liberties(state: &GameState, player: Player) -> Option<usize> {
    queen_position(state, player).map(|queen| {
        queen
            .neighbours()
            .iter()
            .filter(|&&n| !state.is_occupied(n))
            .count()
    })
}

/// Whether `player`'s queen is on the board and fully surrounded
pub fn has_lost(state: &GameState, player: Player) -> bool {
    queen_liberties(state, player) == Some(0)
}

/// Result of the position; both queens surrounded at once is a draw
pub fn outcome(state: &GameState) -> GameResult {
    match (has_lost(state, Player::White), has_lost(state, Player::Black)) {
        (true, true) => GameResult::Draw,
        (true, false) => GameResult::BlackWins,
        (false, true) => GameResult::WhiteWins,
        (false, false) => GameResult::Ongoing,
    }
}

/// The winning player, `None` while undecided or drawn
pub fn winner(state: &GameState) -> Option<Player> {
    outcome(state).winner()
}

impl GameState {
    /// Game result
    pub fn result(&self) -> GameResult {
        outcome(self)
    }
}
