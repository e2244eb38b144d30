use std::collections::VecDeque;

use crate::{Position, BOARD_SIZE};

const NUM_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
/// Node id of the virtual goal behind row 9.
const TOP_GOAL: usize = NUM_CELLS;
/// Node id of the virtual goal behind row 1.
const BOTTOM_GOAL: usize = NUM_CELLS + 1;
const NUM_NODES: usize = NUM_CELLS + 2;

/// One of the two virtual goal nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Goal {
    /// Row 9, the target edge of the player starting at (5, 1).
    Top,
    /// Row 1, the target edge of the player starting at (5, 9).
    Bottom,
}

impl Goal {
    fn node_id(self) -> usize {
        match self {
            Goal::Top => TOP_GOAL,
            Goal::Bottom => BOTTOM_GOAL,
        }
    }
}

/// The directed graph of legal single-step moves for the current board.
///
/// Nodes are the 81 cells plus the two goal sentinels; edges encode
/// ordinary steps, steps removed by walls, and jump moves over an
/// adjacent opponent. A fresh graph value is built from the wall lists
/// and player positions every time legality must be checked; nothing is
/// shared or mutated across validation attempts.
pub struct MoveGraph {
    /// Successor lists indexed by node id. Cell ids are row-major,
    /// `(y - 1) * 9 + (x - 1)`.
    succ: Vec<Vec<usize>>,
}

fn cell_id(pos: Position) -> usize {
    debug_assert!(pos.on_board());
    (pos.y as usize - 1) * BOARD_SIZE as usize + (pos.x as usize - 1)
}

fn cell_at(id: usize) -> Position {
    debug_assert!(id < NUM_CELLS);
    Position {
        x: (id % BOARD_SIZE as usize) as i8 + 1,
        y: (id / BOARD_SIZE as usize) as i8 + 1,
    }
}

/// Drops the edge between two cells in both directions. Idempotent, so
/// wall lists that happen to cover the same edge twice are harmless.
fn remove_edge(succ: &mut [Vec<usize>], a: Position, b: Position) {
    let (a, b) = (cell_id(a), cell_id(b));
    succ[a].retain(|&n| n != b);
    succ[b].retain(|&n| n != a);
}

impl MoveGraph {
    /// Builds the move graph for the given player positions and wall lists.
    ///
    /// The result is fully determined by its inputs. Base edges are added
    /// per cell in the fixed order left, right, down, up; this order is
    /// the tie-break for every shortest-path query on the graph (the
    /// first-discovered parent wins in the breadth-first search).
    pub fn build(players: [Position; 2], horizontal: &[Position], vertical: &[Position]) -> Self {
        let mut succ = vec![Vec::new(); NUM_NODES];

        for y in 1..=BOARD_SIZE {
            for x in 1..=BOARD_SIZE {
                let id = cell_id(Position { x, y });
                if x > 1 {
                    succ[id].push(cell_id(Position { x: x - 1, y }));
                }
                if x < BOARD_SIZE {
                    succ[id].push(cell_id(Position { x: x + 1, y }));
                }
                if y > 1 {
                    succ[id].push(cell_id(Position { x, y: y - 1 }));
                }
                if y < BOARD_SIZE {
                    succ[id].push(cell_id(Position { x, y: y + 1 }));
                }
            }
        }

        // A horizontal wall at (x, y) closes the row boundary above row
        // y-1 under columns x and x+1.
        for &w in horizontal {
            remove_edge(
                &mut succ,
                Position { x: w.x, y: w.y - 1 },
                Position { x: w.x, y: w.y },
            );
            remove_edge(
                &mut succ,
                Position {
                    x: w.x + 1,
                    y: w.y - 1,
                },
                Position {
                    x: w.x + 1,
                    y: w.y,
                },
            );
        }

        // A vertical wall at (x, y) closes the column boundary left of
        // column x along rows y and y+1.
        for &w in vertical {
            remove_edge(
                &mut succ,
                Position { x: w.x - 1, y: w.y },
                Position { x: w.x, y: w.y },
            );
            remove_edge(
                &mut succ,
                Position {
                    x: w.x - 1,
                    y: w.y + 1,
                },
                Position {
                    x: w.x,
                    y: w.y + 1,
                },
            );
        }

        // Adjacent players cannot step onto each other; they jump instead.
        let [p1, p2] = players;
        let (id1, id2) = (cell_id(p1), cell_id(p2));
        if succ[id1].contains(&id2) || succ[id2].contains(&id1) {
            remove_edge(&mut succ, p1, p2);
            // Jump targets are computed from a snapshot of the successor
            // sets taken before any jump edge is added, so the two
            // players' jump edges cannot feed each other.
            let over_p1 = succ[id1].clone();
            let over_p2 = succ[id2].clone();
            add_jump_edges(&mut succ, p1, p2, &over_p2);
            add_jump_edges(&mut succ, p2, p1, &over_p1);
        }

        for x in 1..=BOARD_SIZE {
            succ[cell_id(Position { x, y: BOARD_SIZE })].push(TOP_GOAL);
            succ[cell_id(Position { x, y: 1 })].push(BOTTOM_GOAL);
        }

        Self { succ }
    }

    /// The cells reachable from `from` in a single step.
    pub fn successors(&self, from: Position) -> impl Iterator<Item = Position> + '_ {
        self.succ[cell_id(from)]
            .iter()
            .filter(|&&id| id < NUM_CELLS)
            .map(|&id| cell_at(id))
    }

    /// Whether a token on `from` may step to `to`.
    pub fn is_successor(&self, from: Position, to: Position) -> bool {
        self.succ[cell_id(from)].contains(&cell_id(to))
    }

    /// Whether any path leads from `from` to the given goal node.
    pub fn can_reach_goal(&self, from: Position, goal: Goal) -> bool {
        self.shortest_path(from, goal).is_some()
    }

    /// The minimum-edge-count path from `from` to the given goal node, as
    /// the list of visited cells starting with `from` itself (the goal
    /// sentinel is not included). Among equally short paths, the one
    /// following the graph's fixed adjacency order wins.
    pub fn shortest_path(&self, from: Position, goal: Goal) -> Option<Vec<Position>> {
        let start = cell_id(from);
        let target = goal.node_id();
        let mut parent = [usize::MAX; NUM_NODES];
        parent[start] = start;
        let mut queue = VecDeque::from([start]);
        'search: while let Some(node) = queue.pop_front() {
            for &next in &self.succ[node] {
                if parent[next] == usize::MAX {
                    parent[next] = node;
                    if next == target {
                        break 'search;
                    }
                    queue.push_back(next);
                }
            }
        }
        if parent[target] == usize::MAX {
            return None;
        }

        let mut path = Vec::new();
        let mut node = parent[target];
        while node != start {
            path.push(cell_at(node));
            node = parent[node];
        }
        path.push(from);
        path.reverse();
        Some(path)
    }
}

/// Adds the jump edges for a token on `from` facing an adjacent opponent
/// on `over`. `over_succ` is the opponent's successor list before any
/// jump edge was added.
fn add_jump_edges(succ: &mut [Vec<usize>], from: Position, over: Position, over_succ: &[usize]) {
    let from_id = cell_id(from);
    let straight = Position {
        x: 2 * over.x - from.x,
        y: 2 * over.y - from.y,
    };
    if straight.on_board() && over_succ.contains(&cell_id(straight)) {
        succ[from_id].push(cell_id(straight));
    } else {
        // The cell behind the opponent is walled off or beyond the board
        // edge; the token may jump diagonally to any cell the opponent
        // could step to, except back onto its own cell.
        for &target in over_succ {
            if target != from_id {
                succ[from_id].push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    fn fresh(players: [Position; 2]) -> MoveGraph {
        MoveGraph::build(players, &[], &[])
    }

    // Player positions far from the area under test.
    const IDLE: [Position; 2] = [Position { x: 1, y: 1 }, Position { x: 9, y: 9 }];

    #[test]
    fn base_grid_successor_order() {
        let graph = fresh([pos!(1, 1), pos!(9, 9)]);
        let mid: Vec<Position> = graph.successors(pos!(5, 5)).collect();
        assert_eq!(mid, vec![pos!(4, 5), pos!(6, 5), pos!(5, 4), pos!(5, 6)]);
        let corner: Vec<Position> = graph.successors(pos!(1, 5)).collect();
        assert_eq!(corner, vec![pos!(2, 5), pos!(1, 4), pos!(1, 6)]);
    }

    #[test]
    fn horizontal_wall_removes_both_column_edges() {
        let graph = MoveGraph::build(IDLE, &[pos!(4, 4)], &[]);
        assert!(!graph.is_successor(pos!(4, 3), pos!(4, 4)));
        assert!(!graph.is_successor(pos!(4, 4), pos!(4, 3)));
        assert!(!graph.is_successor(pos!(5, 3), pos!(5, 4)));
        assert!(!graph.is_successor(pos!(5, 4), pos!(5, 3)));
        // The columns on either side of the wall are untouched.
        assert!(graph.is_successor(pos!(3, 3), pos!(3, 4)));
        assert!(graph.is_successor(pos!(6, 3), pos!(6, 4)));
    }

    #[test]
    fn vertical_wall_removes_both_row_edges() {
        let graph = MoveGraph::build(IDLE, &[], &[pos!(4, 4)]);
        assert!(!graph.is_successor(pos!(3, 4), pos!(4, 4)));
        assert!(!graph.is_successor(pos!(4, 4), pos!(3, 4)));
        assert!(!graph.is_successor(pos!(3, 5), pos!(4, 5)));
        assert!(!graph.is_successor(pos!(4, 5), pos!(3, 5)));
        assert!(graph.is_successor(pos!(3, 3), pos!(4, 3)));
        assert!(graph.is_successor(pos!(3, 6), pos!(4, 6)));
    }

    #[test]
    fn adjacent_players_jump_straight() {
        let graph = fresh([pos!(5, 4), pos!(5, 5)]);
        assert!(!graph.is_successor(pos!(5, 4), pos!(5, 5)));
        assert!(!graph.is_successor(pos!(5, 5), pos!(5, 4)));
        assert!(graph.is_successor(pos!(5, 4), pos!(5, 6)));
        assert!(graph.is_successor(pos!(5, 5), pos!(5, 3)));
        // No diagonal moves when the straight jump is available.
        assert!(!graph.is_successor(pos!(5, 4), pos!(4, 5)));
        assert!(!graph.is_successor(pos!(5, 4), pos!(6, 5)));
    }

    #[test]
    fn walled_jump_goes_diagonal() {
        // A wall directly behind the opponent forces diagonal jumps.
        let graph = MoveGraph::build([pos!(5, 4), pos!(5, 5)], &[pos!(5, 6)], &[]);
        assert!(!graph.is_successor(pos!(5, 4), pos!(5, 6)));
        assert!(graph.is_successor(pos!(5, 4), pos!(4, 5)));
        assert!(graph.is_successor(pos!(5, 4), pos!(6, 5)));
        assert!(!graph.is_successor(pos!(5, 4), pos!(5, 4)));
    }

    #[test]
    fn board_edge_jump_goes_diagonal() {
        // The opponent stands on the top row; the straight jump would
        // leave the board.
        let graph = fresh([pos!(5, 8), pos!(5, 9)]);
        assert!(graph.is_successor(pos!(5, 8), pos!(4, 9)));
        assert!(graph.is_successor(pos!(5, 8), pos!(6, 9)));
    }

    #[test]
    fn jump_edges_do_not_feed_each_other() {
        // Jump targets come from the pre-jump successor sets, so one
        // player's fresh jump edges never become the other's targets.
        let graph = fresh([pos!(5, 9), pos!(5, 8)]);
        // The player on (5, 9) jumps straight down over the opponent.
        assert!(graph.is_successor(pos!(5, 9), pos!(5, 7)));
        // The player on (5, 8) would jump off the top edge, so it goes
        // diagonal; (5, 7) is not among the opponent's successors and
        // must not leak in from the jump edge added above.
        assert!(graph.is_successor(pos!(5, 8), pos!(4, 9)));
        assert!(graph.is_successor(pos!(5, 8), pos!(6, 9)));
        assert!(!graph.is_successor(pos!(5, 8), pos!(5, 7)));
    }

    #[test]
    fn goal_edges_from_border_rows() {
        let graph = fresh([pos!(1, 1), pos!(9, 9)]);
        for x in 1..=9 {
            assert!(graph.can_reach_goal(pos!(x, 9), Goal::Top));
            assert!(graph.can_reach_goal(pos!(x, 1), Goal::Bottom));
        }
    }

    #[test]
    fn fresh_shortest_path_is_straight() {
        let graph = fresh([pos!(5, 1), pos!(5, 9)]);
        let path = graph.shortest_path(pos!(5, 1), Goal::Top).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], pos!(5, 1));
        assert_eq!(path[1], pos!(5, 2));
        assert_eq!(path[8], pos!(5, 9));
    }

    #[test]
    fn path_on_goal_row_is_single_cell() {
        let graph = fresh([pos!(3, 9), pos!(5, 1)]);
        let path = graph.shortest_path(pos!(3, 9), Goal::Top).unwrap();
        assert_eq!(path, vec![pos!(3, 9)]);
    }

    #[test]
    fn shortest_path_routes_around_walls() {
        // Wall off the cell above the start; the path must dodge sideways.
        let graph = MoveGraph::build(IDLE, &[pos!(5, 2)], &[]);
        let path = graph.shortest_path(pos!(5, 1), Goal::Top).unwrap();
        assert_eq!(path.len(), 10);
        // Left is tried before right, so the dodge goes through (4, 1).
        assert_eq!(path[1], pos!(4, 1));
    }

    #[test]
    fn shortest_path_is_deterministic() {
        let walls_h = [pos!(3, 5), pos!(6, 3)];
        let walls_v = [pos!(2, 2), pos!(8, 6)];
        let a = MoveGraph::build(IDLE, &walls_h, &walls_v).shortest_path(pos!(5, 1), Goal::Top);
        let b = MoveGraph::build(IDLE, &walls_h, &walls_v).shortest_path(pos!(5, 1), Goal::Top);
        assert_eq!(a, b);
    }

    #[test]
    fn severed_region_has_no_path() {
        // Box in the two bottom-left corner cells.
        let graph = MoveGraph::build([pos!(1, 1), pos!(9, 9)], &[pos!(1, 2)], &[pos!(3, 1)]);
        assert!(!graph.can_reach_goal(pos!(1, 1), Goal::Top));
        assert!(!graph.can_reach_goal(pos!(2, 1), Goal::Top));
        assert!(graph.can_reach_goal(pos!(9, 9), Goal::Bottom));
    }
}
