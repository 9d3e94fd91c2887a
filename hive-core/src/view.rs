//! Read-only projection of a game for display layers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::game::{GameResult, GameState, Move, Player};
use crate::pieces::TileKind;

/// Snapshot of everything a viewer needs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    /// "x,y,z" -> "<owner> <kind>"
    pub grid: BTreeMap<String, String>,
    /// player -> kind -> tiles left in hand
    pub hands: BTreeMap<Player, BTreeMap<TileKind, u8>>,
    pub moves: Vec<Move>,
    pub to_move: Player,
    pub ply: u32,
    pub result: GameResult,
}

impl GameView {
    pub fn from_state(state: &GameState) -> Self {
        let grid = state
            .pieces()
            .map(|(hex, piece)| (hex.to_string(), piece.to_string()))
            .collect();

        let hands = Player::ALL
            .into_iter()
            .map(|player| {
                let hand = state.hand(player);
                let counts = TileKind::ALL
                    .into_iter()
                    .map(|kind| (kind, hand.count(kind)))
                    .collect();
                (player, counts)
            })
            .collect();

        Self {
            grid,
            hands,
            moves: state.legal_moves(),
            to_move: state.current_player(),
            ply: state.ply(),
            result: state.result(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
