use crate::{Orientation, Position};

/// The error type for the mutating game operations, i.e. moving a token,
/// placing a wall, or playing an automated turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalAction {
    /// The player number was not 1 or 2.
    InvalidPlayer { player: u8 },
    /// A token target outside the board, or a wall anchor outside the
    /// valid range for its orientation.
    OutOfBounds { position: Position },
    /// The target cell is not a successor of the token's current cell in
    /// the move graph.
    IllegalMove { from: Position, to: Position },
    /// The player has already placed all of their walls.
    NoWallsRemaining,
    /// The wall coincides with, touches end-to-end, or crosses a wall
    /// already on the board.
    WallOverlap {
        position: Position,
        orientation: Orientation,
    },
    /// The wall would cut off a player's last path to their goal row.
    WallBlocksPath {
        position: Position,
        orientation: Orientation,
    },
    /// A player already stands on their goal row.
    GameAlreadyFinished { winner: String },
}

impl std::error::Error for IllegalAction {}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalAction::InvalidPlayer { player } => {
                write!(f, "Player number must be 1 or 2, got {}", player)
            }
            IllegalAction::OutOfBounds { position } => {
                write!(f, "Position {} is outside the board", position)
            }
            IllegalAction::IllegalMove { from, to } => {
                write!(f, "A token on {} cannot step to {}", from, to)
            }
            IllegalAction::NoWallsRemaining => {
                write!(f, "The player has already placed all of their walls")
            }
            IllegalAction::WallOverlap {
                position,
                orientation,
            } => write!(
                f,
                "A {} wall at {} overlaps a wall already on the board",
                orientation, position
            ),
            IllegalAction::WallBlocksPath {
                position,
                orientation,
            } => write!(
                f,
                "A {} wall at {} would cut off a player from their goal row",
                orientation, position
            ),
            IllegalAction::GameAlreadyFinished { winner } => {
                write!(f, "The game is already finished, won by {}", winner)
            }
        }
    }
}

/// The error type for reconstructing a game from a snapshot.
///
/// Every variant is fatal to that construction call only; no partially
/// built state is ever handed to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedSnapshot {
    /// Placed walls plus both remaining budgets did not add up to 20.
    WallTotalMismatch { total: usize },
    /// A remaining wall budget above 10.
    WallBudgetOutOfRange { player: u8, walls: u8 },
    /// A player position outside the board.
    PlayerOutOfBounds { player: u8, position: Position },
    /// Both players on the same cell.
    PlayersOnSameCell { position: Position },
    /// A wall anchor outside the valid range for its orientation.
    WallOutOfBounds {
        position: Position,
        orientation: Orientation,
    },
    /// Two placed walls that coincide, touch end-to-end, or cross.
    OverlappingWalls {
        position: Position,
        orientation: Orientation,
    },
    /// The walls leave a player with no path to their goal row.
    NoPathToGoal { player: u8 },
}

impl std::error::Error for MalformedSnapshot {}

impl std::fmt::Display for MalformedSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedSnapshot::WallTotalMismatch { total } => write!(
                f,
                "Placed walls plus remaining budgets must total 20, got {}",
                total
            ),
            MalformedSnapshot::WallBudgetOutOfRange { player, walls } => write!(
                f,
                "Player {} has a wall budget of {}, the maximum is 10",
                player, walls
            ),
            MalformedSnapshot::PlayerOutOfBounds { player, position } => {
                write!(f, "Player {} stands outside the board, at {}", player, position)
            }
            MalformedSnapshot::PlayersOnSameCell { position } => {
                write!(f, "Both players stand on {}", position)
            }
            MalformedSnapshot::WallOutOfBounds {
                position,
                orientation,
            } => write!(
                f,
                "A {} wall cannot be anchored at {}",
                orientation, position
            ),
            MalformedSnapshot::OverlappingWalls {
                position,
                orientation,
            } => write!(
                f,
                "The {} wall at {} overlaps another wall",
                orientation, position
            ),
            MalformedSnapshot::NoPathToGoal { player } => {
                write!(f, "Player {} has no path to their goal row", player)
            }
        }
    }
}
