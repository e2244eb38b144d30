use crate::errors::{IllegalAction, MalformedSnapshot};
use crate::graph::{Goal, MoveGraph};
use crate::player::{Player, STARTING_WALLS};
use crate::protocol::{GameSnapshot, Move, Walls};
use crate::{pos, CellSet, Orientation, Position, BOARD_SIZE};

/// Total wall count, placed plus remaining, across both players.
pub const TOTAL_WALLS: u8 = 2 * STARTING_WALLS;

/// The goal node of each seat, in player order.
const GOALS: [Goal; 2] = [Goal::Top, Goal::Bottom];

/// A Quoridor game in progress.
///
/// The state is mutated only through the validating operations
/// ([`apply_move`](Self::apply_move), [`place_wall`](Self::place_wall),
/// [`play_auto_turn`](Self::play_auto_turn)); every one of them checks
/// its preconditions fully before touching the state, so a failed call
/// leaves the game exactly as it was. A single value is meant to be
/// owned and driven by one session at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quoridor {
    players: [Player; 2],
    walls: Walls,
}

impl Quoridor {
    /// Starts a fresh game: the first player at (5, 1) racing toward row
    /// 9, the second at (5, 9) racing toward row 1, ten walls each,
    /// nothing placed.
    pub fn new(name_1: &str, name_2: &str) -> Self {
        Self {
            players: [Player::fresh(name_1, 0), Player::fresh(name_2, 1)],
            walls: Walls::default(),
        }
    }

    /// Reconstructs an in-progress game from a snapshot.
    ///
    /// The snapshot must satisfy every game invariant: wall budgets in
    /// range and conserving the total of 20, players on distinct cells of
    /// the board, wall anchors in range, no overlapping or crossing
    /// walls, and a path to the goal row for both players.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, MalformedSnapshot> {
        let GameSnapshot { players, walls } = snapshot;

        for (i, player) in players.iter().enumerate() {
            let no = i as u8 + 1;
            if player.walls > STARTING_WALLS {
                return Err(MalformedSnapshot::WallBudgetOutOfRange {
                    player: no,
                    walls: player.walls,
                });
            }
            if !player.pos.on_board() {
                return Err(MalformedSnapshot::PlayerOutOfBounds {
                    player: no,
                    position: player.pos,
                });
            }
        }
        if players[0].pos == players[1].pos {
            return Err(MalformedSnapshot::PlayersOnSameCell {
                position: players[0].pos,
            });
        }

        let total = walls.len() + players[0].walls as usize + players[1].walls as usize;
        if total != TOTAL_WALLS as usize {
            return Err(MalformedSnapshot::WallTotalMismatch { total });
        }

        for (orientation, list) in [
            (Orientation::Horizontal, &walls.horizontal),
            (Orientation::Vertical, &walls.vertical),
        ] {
            for &anchor in list {
                if !orientation.anchor_in_range(anchor) {
                    return Err(MalformedSnapshot::WallOutOfBounds {
                        position: anchor,
                        orientation,
                    });
                }
            }
        }

        // Replay the walls through the same conflict check that guards
        // live placement.
        let mut horizontal = CellSet::new();
        let mut vertical = CellSet::new();
        for &anchor in &walls.horizontal {
            if Self::conflicts(horizontal, vertical, anchor, Orientation::Horizontal) {
                return Err(MalformedSnapshot::OverlappingWalls {
                    position: anchor,
                    orientation: Orientation::Horizontal,
                });
            }
            horizontal = horizontal.insert(anchor);
        }
        for &anchor in &walls.vertical {
            if Self::conflicts(horizontal, vertical, anchor, Orientation::Vertical) {
                return Err(MalformedSnapshot::OverlappingWalls {
                    position: anchor,
                    orientation: Orientation::Vertical,
                });
            }
            vertical = vertical.insert(anchor);
        }

        let graph = MoveGraph::build(
            [players[0].pos, players[1].pos],
            &walls.horizontal,
            &walls.vertical,
        );
        for (i, goal) in GOALS.iter().enumerate() {
            if !graph.can_reach_goal(players[i].pos, *goal) {
                return Err(MalformedSnapshot::NoPathToGoal { player: i as u8 + 1 });
            }
        }

        Ok(Self { players, walls })
    }

    /// A transferable copy of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            walls: self.walls.clone(),
        }
    }

    /// The winner's name, if a token has reached its goal row.
    pub fn winner(&self) -> Option<&str> {
        if self.players[0].pos.y == BOARD_SIZE {
            return Some(&self.players[0].name);
        }
        if self.players[1].pos.y == 1 {
            return Some(&self.players[1].name);
        }
        None
    }

    /// Steps the given player's token to `position`.
    pub fn apply_move(&mut self, player: u8, position: Position) -> Result<(), IllegalAction> {
        let seat = Self::seat(player)?;
        if !position.on_board() {
            return Err(IllegalAction::OutOfBounds { position });
        }
        let graph = self.graph();
        let from = self.players[seat].pos;
        if !graph.is_successor(from, position) {
            return Err(IllegalAction::IllegalMove { from, to: position });
        }
        self.players[seat].pos = position;
        Ok(())
    }

    /// Places a wall for the given player at the given anchor.
    pub fn place_wall(
        &mut self,
        player: u8,
        position: Position,
        orientation: Orientation,
    ) -> Result<(), IllegalAction> {
        let seat = Self::seat(player)?;
        if self.players[seat].walls == 0 {
            return Err(IllegalAction::NoWallsRemaining);
        }
        if !orientation.anchor_in_range(position) {
            return Err(IllegalAction::OutOfBounds { position });
        }
        let horizontal: CellSet = self.walls.horizontal.iter().copied().collect();
        let vertical: CellSet = self.walls.vertical.iter().copied().collect();
        if Self::conflicts(horizontal, vertical, position, orientation) {
            return Err(IllegalAction::WallOverlap {
                position,
                orientation,
            });
        }

        // Rebuild the graph with the candidate nominally present; the
        // wall only becomes part of the game once both players can still
        // reach their goal.
        let mut walls = self.walls.clone();
        match orientation {
            Orientation::Horizontal => walls.horizontal.push(position),
            Orientation::Vertical => walls.vertical.push(position),
        }
        let graph = MoveGraph::build(self.positions(), &walls.horizontal, &walls.vertical);
        for (i, goal) in GOALS.iter().enumerate() {
            if !graph.can_reach_goal(self.players[i].pos, *goal) {
                return Err(IllegalAction::WallBlocksPath {
                    position,
                    orientation,
                });
            }
        }

        self.walls = walls;
        self.players[seat].walls -= 1;
        Ok(())
    }

    /// Chooses and applies the automated move for the given player,
    /// returning the move actually made.
    ///
    /// The policy compares shortest-path lengths: a player that is out of
    /// walls, or at least as close to its goal as the opponent, advances
    /// along its own shortest path. A player that is strictly behind
    /// tries to place a wall across the edge the opponent is about to
    /// take (the two straddling anchors are tried in the order returned
    /// by [`blocking_walls`]); if no such wall can be placed, it advances
    /// instead. Given equal states the chosen move is always the same.
    pub fn play_auto_turn(&mut self, player: u8) -> Result<Move, IllegalAction> {
        let seat = Self::seat(player)?;
        if let Some(winner) = self.winner() {
            return Err(IllegalAction::GameAlreadyFinished {
                winner: String::from(winner),
            });
        }

        let graph = self.graph();
        let own_path = graph
            .shortest_path(self.players[seat].pos, GOALS[seat])
            .expect("both players can always reach their goal");
        let opponent_path = graph
            .shortest_path(self.players[1 - seat].pos, GOALS[1 - seat])
            .expect("both players can always reach their goal");

        if self.players[seat].walls > 0 && own_path.len() > opponent_path.len() {
            for (anchor, orientation) in
                blocking_walls(self.players[1 - seat].pos, opponent_path[1])
            {
                if self.place_wall(player, anchor, orientation).is_ok() {
                    return Ok(Move::PlaceWall {
                        position: anchor,
                        orientation,
                    });
                }
            }
        }

        let to = own_path[1];
        self.apply_move(player, to)?;
        Ok(Move::Advance { to })
    }

    fn seat(player: u8) -> Result<usize, IllegalAction> {
        match player {
            1 => Ok(0),
            2 => Ok(1),
            _ => Err(IllegalAction::InvalidPlayer { player }),
        }
    }

    fn positions(&self) -> [Position; 2] {
        [self.players[0].pos, self.players[1].pos]
    }

    fn graph(&self) -> MoveGraph {
        MoveGraph::build(self.positions(), &self.walls.horizontal, &self.walls.vertical)
    }

    /// Same-orientation walls conflict when their anchors coincide or sit
    /// one cell apart along the wall's own axis; cross-orientation walls
    /// conflict when their two-cell footprints coincide (a crossing).
    /// The sets are recomputed from the current wall lists on every call.
    fn conflicts(
        horizontal: CellSet,
        vertical: CellSet,
        anchor: Position,
        orientation: Orientation,
    ) -> bool {
        match orientation {
            Orientation::Horizontal => {
                horizontal.contains(anchor)
                    || horizontal.contains(pos!(anchor.x - 1, anchor.y))
                    || horizontal.contains(pos!(anchor.x + 1, anchor.y))
                    || vertical.contains(pos!(anchor.x + 1, anchor.y - 1))
            }
            Orientation::Vertical => {
                vertical.contains(anchor)
                    || vertical.contains(pos!(anchor.x, anchor.y - 1))
                    || vertical.contains(pos!(anchor.x, anchor.y + 1))
                    || horizontal.contains(pos!(anchor.x - 1, anchor.y + 1))
            }
        }
    }
}

/// The wall placements that would close the boundary a token is about to
/// cross, in the order they are tried. A jump step spans more than one
/// boundary, so it yields no candidates.
fn blocking_walls(from: Position, to: Position) -> Vec<(Position, Orientation)> {
    match (to.x - from.x, to.y - from.y) {
        (0, 1) => vec![
            (pos!(from.x, from.y + 1), Orientation::Horizontal),
            (pos!(from.x - 1, from.y + 1), Orientation::Horizontal),
        ],
        (0, -1) => vec![
            (pos!(from.x, from.y), Orientation::Horizontal),
            (pos!(from.x - 1, from.y), Orientation::Horizontal),
        ],
        (1, 0) => vec![
            (pos!(from.x + 1, from.y), Orientation::Vertical),
            (pos!(from.x + 1, from.y - 1), Orientation::Vertical),
        ],
        (-1, 0) => vec![
            (pos!(from.x, from.y), Orientation::Vertical),
            (pos!(from.x, from.y - 1), Orientation::Vertical),
        ],
        _ => Vec::new(),
    }
}
