use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;

use crate::statistics::Outcome;

pub const HEADER: &str = "timestamp,method,url,response_time_seconds,http_status_code";

/// Append-only results log, one CSV row per completed dispatch. The writer
/// is mutex-guarded so parallel workers never interleave rows.
pub struct ResultsLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl ResultsLog {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create results log at {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{HEADER}").context("failed to write results log header")?;
        writer.flush().context("failed to flush results log header")?;
        Ok(Self {
            writer: Mutex::new(writer),
            path: path.to_path_buf(),
        })
    }

    /// Rows are flushed as they come so an interrupted run still leaves a
    /// usable partial file.
    pub fn append(&self, outcome: &Outcome) -> anyhow::Result<()> {
        let mut writer = self.writer.lock().unwrap();
        writeln!(
            writer,
            "{},{},{},{:.6},{}",
            outcome.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"),
            outcome.method,
            outcome.url,
            outcome.elapsed.as_secs_f64(),
            outcome.status.code(),
        )
        .context("failed to append outcome row")?;
        writer.flush().context("failed to flush outcome row")
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
