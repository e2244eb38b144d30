use serde::{Deserialize, Serialize};

use crate::{Orientation, Player, Position};

/// A full, transferable snapshot of a game.
///
/// This is the exact shape consumed by renderers and by any transport
/// layer, and the shape accepted by
/// [`Quoridor::from_snapshot`](crate::Quoridor::from_snapshot) to resume
/// an in-progress game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The two players in fixed order: the first entry starts at (5, 1)
    /// and races toward row 9, the second starts at (5, 9) and races
    /// toward row 1.
    pub players: [Player; 2],
    pub walls: Walls,
}

/// The placed walls, by orientation, in placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls {
    pub horizontal: Vec<Position>,
    pub vertical: Vec<Position>,
}

impl Walls {
    /// Placed walls across both orientations.
    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

/// A move chosen or applied for one player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    /// Step the token to the given cell.
    Advance { to: Position },
    /// Place a wall at the given anchor.
    PlaceWall {
        position: Position,
        orientation: Orientation,
    },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::pos;

    #[test]
    fn snapshot_wire_shape() {
        let snapshot = GameSnapshot {
            players: [
                Player {
                    name: String::from("idul"),
                    walls: 7,
                    pos: pos!(5, 5),
                },
                Player {
                    name: String::from("automate"),
                    walls: 3,
                    pos: pos!(8, 6),
                },
            ],
            walls: Walls {
                horizontal: vec![pos!(4, 4), pos!(2, 6)],
                vertical: vec![pos!(6, 2)],
            },
        };
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({
                "players": [
                    {"name": "idul", "walls": 7, "pos": [5, 5]},
                    {"name": "automate", "walls": 3, "pos": [8, 6]},
                ],
                "walls": {
                    "horizontal": [[4, 4], [2, 6]],
                    "vertical": [[6, 2]],
                },
            })
        );
    }

    #[test]
    fn snapshot_deserializes_back() {
        let snapshot = GameSnapshot {
            players: [
                Player {
                    name: String::from("a"),
                    walls: 10,
                    pos: pos!(5, 1),
                },
                Player {
                    name: String::from("b"),
                    walls: 10,
                    pos: pos!(5, 9),
                },
            ],
            walls: Walls::default(),
        };
        let text = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(serde_json::from_str::<GameSnapshot>(&text).unwrap(), snapshot);
    }

    #[test]
    fn move_wire_shape() {
        assert_eq!(
            serde_json::to_value(Move::Advance { to: pos!(5, 2) }).unwrap(),
            json!({"type": "advance", "to": [5, 2]})
        );
        assert_eq!(
            serde_json::to_value(Move::PlaceWall {
                position: pos!(4, 4),
                orientation: Orientation::Horizontal,
            })
            .unwrap(),
            json!({
                "type": "place_wall",
                "position": [4, 4],
                "orientation": "horizontal",
            })
        );
    }
}
