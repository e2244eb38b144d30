use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use quoridor::{GameSnapshot, Move};
use serde::{Deserialize, Serialize};

/// Collects the moves of one game and writes them, together with the
/// final state, as a JSON file into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    moves: Vec<RecordedMove>,
}

#[derive(Serialize, Deserialize)]
pub struct RecordedMove {
    pub player: u8,
    pub action: Move,
}

#[derive(Serialize, Deserialize)]
pub struct GameRecording {
    pub moves: Vec<RecordedMove>,
    pub final_snapshot: GameSnapshot,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            moves: Vec::new(),
        })
    }

    pub fn store_move(&mut self, player: u8, action: Move) {
        self.moves.push(RecordedMove { player, action });
    }

    /// Writes the collected moves and the final state, then resets the
    /// recorder for the next game.
    pub fn write_game_recording(&mut self, final_snapshot: GameSnapshot) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        let recording = GameRecording {
            moves: std::mem::take(&mut self.moves),
            final_snapshot,
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(())
    }
}
