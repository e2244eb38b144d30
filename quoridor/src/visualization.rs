use std::fmt;

use crate::{GameSnapshot, Quoridor};

/// Renders a snapshot as fixed-format ASCII art.
///
/// Column 1 is leftmost, row 1 is the bottom line. A horizontal wall is
/// drawn in the gap above the row below its anchor, under its anchor
/// column and the next; a vertical wall is drawn left of its anchor
/// column, over its anchor row and the next. Cell rows alternate with
/// wall gap rows, so the drawing directly mirrors the coordinate
/// convention of the snapshot.
pub fn render(snapshot: &GameSnapshot) -> String {
    // 9 cell rows interleaved with 8 gap rows, 39 columns each.
    let mut canvas = vec![[' '; 39]; 17];
    for (r, line) in canvas.iter_mut().enumerate() {
        if r % 2 == 0 {
            for c in (4..=36).step_by(4) {
                line[c] = '.';
            }
            line[0] = (b'9' - (r / 2) as u8) as char;
        }
        line[2] = '|';
        line[38] = '|';
    }

    for (i, player) in snapshot.players.iter().enumerate() {
        let (x, y) = (player.pos.x as usize, player.pos.y as usize);
        canvas[(9 - y) * 2][x * 4] = (b'1' + i as u8) as char;
    }
    for wall in &snapshot.walls.horizontal {
        let (x, y) = (wall.x as usize, wall.y as usize);
        for c in x * 4 - 1..x * 4 + 6 {
            canvas[(9 - y) * 2 + 1][c] = '-';
        }
    }
    for wall in &snapshot.walls.vertical {
        let (x, y) = (wall.x as usize, wall.y as usize);
        for line in &mut canvas[(9 - y) * 2 - 2..=(9 - y) * 2] {
            line[x * 4 - 2] = '|';
        }
    }

    let mut result = format!(
        "Legend: 1={}, 2={}\n",
        snapshot.players[0].name, snapshot.players[1].name
    );
    result += "   -----------------------------------\n";
    for line in &canvas {
        result.extend(line);
        result.push('\n');
    }
    result += "--|-----------------------------------\n";
    result += "  | 1   2   3   4   5   6   7   8   9";
    result
}

impl fmt::Display for Quoridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.snapshot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pos, Player, Walls};

    #[test]
    fn render_mid_game_board() {
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
                horizontal: vec![pos!(4, 4), pos!(2, 6), pos!(3, 8), pos!(5, 8), pos!(7, 8)],
                vertical: vec![pos!(6, 2), pos!(4, 4), pos!(2, 6), pos!(7, 5), pos!(7, 7)],
            },
        };
        let expected = "\
Legend: 1=idul, 2=automate
   -----------------------------------
9 | .   .   .   .   .   .   .   .   . |
  |                                   |
8 | .   .   .   .   .   . | .   .   . |
  |        ------- -------|-------    |
7 | . | .   .   .   .   . | .   .   . |
  |   |                               |
6 | . | .   .   .   .   . | .   2   . |
  |    -------            |           |
5 | .   .   . | .   1   . | .   .   . |
  |           |                       |
4 | .   .   . | .   .   .   .   .   . |
  |            -------                |
3 | .   .   .   .   . | .   .   .   . |
  |                   |               |
2 | .   .   .   .   . | .   .   .   . |
  |                                   |
1 | .   .   .   .   .   .   .   .   . |
--|-----------------------------------
  | 1   2   3   4   5   6   7   8   9";
        assert_eq!(render(&snapshot), expected);
    }

    #[test]
    fn display_matches_render() {
        let game = crate::Quoridor::new("A", "B");
        assert_eq!(game.to_string(), render(&game.snapshot()));
    }
}
