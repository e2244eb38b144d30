use serde::{Deserialize, Serialize};

use crate::Position;

/// Number of walls each player holds at the start of a game.
pub const STARTING_WALLS: u8 = 10;

/// The record for a single player during one game.
///
/// This is also the exact per-player shape of the snapshot format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Walls this player may still place.
    pub walls: u8,
    /// Current token cell.
    pub pos: Position,
}

impl Player {
    /// Fresh-game record for the given seat: seat 0 starts at (5, 1) and
    /// races toward row 9, seat 1 starts at (5, 9) and races toward row 1.
    pub(crate) fn fresh(name: &str, seat: usize) -> Self {
        let pos = match seat {
            0 => Position::new(5, 1),
            _ => Position::new(5, 9),
        };
        Self {
            name: String::from(name),
            walls: STARTING_WALLS,
            pos,
        }
    }
}
