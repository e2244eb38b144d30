use quoridor::{Quoridor, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::trace;

use crate::recording::Recorder;

/// Turn cap for a single game. The heuristic players always finish far
/// below this; the cap only guards the runner against hanging on an
/// engine regression.
const MAX_TURNS: usize = 500;

pub enum GameResult {
    /// Index into the configured player list, not the seat order of the
    /// game that was played.
    WonByPlayer { player_idx: usize, turns: usize },
    /// The turn cap was reached without a winner.
    Unfinished,
}

/// Plays one fully automated game. Returns an error only on an engine
/// failure, never for the normal end of a game.
pub fn play_game(
    rng: &mut StdRng,
    player_names: [&str; 2],
    show_board: bool,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    // Randomly decide who takes the starting seat.
    let seats = if rng.gen::<bool>() { [1, 0] } else { [0, 1] };
    let mut game = Quoridor::new(player_names[seats[0]], player_names[seats[1]]);

    let mut turns = 0;
    let result = loop {
        if turns >= MAX_TURNS {
            break GameResult::Unfinished;
        }
        let player = (turns % 2) as u8 + 1;
        let action = game.play_auto_turn(player)?;
        turns += 1;
        trace!(player, ?action, "turn played");
        if let Some(rec) = recorder {
            rec.store_move(player, action);
        }
        if show_board {
            eprintln!("{game}");
        }
        if game.winner().is_some() {
            // Seat 0 of this game is the player racing toward row 9.
            let winner_seat = if game.snapshot().players[0].pos.y == BOARD_SIZE {
                0
            } else {
                1
            };
            break GameResult::WonByPlayer {
                player_idx: seats[winner_seat],
                turns,
            };
        }
    };

    if let Some(rec) = recorder {
        rec.write_game_recording(game.snapshot())?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn automated_game_ends_with_a_winner() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = play_game(&mut rng, ["a", "b"], false, &mut None).unwrap();
        match result {
            GameResult::WonByPlayer { player_idx, turns } => {
                assert!(player_idx < 2);
                assert!(turns < MAX_TURNS);
            }
            GameResult::Unfinished => panic!("game hit the turn cap"),
        }
    }

    #[test]
    fn same_seed_gives_the_same_outcome() {
        let outcome = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            match play_game(&mut rng, ["a", "b"], false, &mut None).unwrap() {
                GameResult::WonByPlayer { player_idx, turns } => (player_idx, turns),
                GameResult::Unfinished => panic!("game hit the turn cap"),
            }
        };
        assert_eq!(outcome(7), outcome(7));
    }
}
