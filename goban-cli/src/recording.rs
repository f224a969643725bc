use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use goban::MoveRecord;

pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Writes the finished game's move log as `game_NNNNNN.json`, skipping
    /// over numbers already used by recordings from earlier sessions.
    pub fn write_game_recording(&mut self, moves: &[MoveRecord]) -> anyhow::Result<()> {
        let mut filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        while filepath.exists() {
            self.num += 1;
            filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        }
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, moves)?;
        self.num += 1;
        Ok(())
    }
}
