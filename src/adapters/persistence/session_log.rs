//! Session Logger - Append-only JSONL Session Records
//!
//! Persists analysis sessions to daily JSONL files in the format
//! `sessions/YYYY-MM-DD.jsonl`. Each line is a self-contained JSON
//! record for easy parsing, streaming, and later analysis.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::instrument;

use crate::ports::store::{SessionRecord, SessionStore};

/// Append-only JSONL session logger with daily file rotation.
pub struct SessionLogger {
    /// Base directory for session files.
    sessions_dir: PathBuf,
}

impl SessionLogger {
    /// Create a new session logger in the given data directory.
    pub fn new(data_dir: &str) -> Result<Self> {
        let sessions_dir = Path::new(data_dir).join("sessions");
        fs::create_dir_all(&sessions_dir)
            .context("Failed to create sessions directory")?;
        Ok(Self { sessions_dir })
    }

    /// Load all session records from all daily files, oldest file first.
    pub fn load_all(&self) -> Result<Vec<SessionRecord>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.sessions_dir)
            .context("Failed to read sessions directory")?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "jsonl"))
            .collect();
        paths.sort();

        let mut records = Vec::new();
        for path in paths {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            for line in content.lines().filter(|l| !l.trim().is_empty()) {
                let record: SessionRecord = serde_json::from_str(line)
                    .with_context(|| format!("Corrupt record in {}", path.display()))?;
                records.push(record);
            }
        }
        Ok(records)
    }
}

impl SessionStore for SessionLogger {
    #[instrument(skip(self, record), fields(session_id = %record.id))]
    fn append(&self, record: &SessionRecord) -> Result<()> {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        let path = self.sessions_dir.join(format!("{date}.jsonl"));

        let mut json = serde_json::to_string(record)
            .context("Failed to serialize session record")?;
        json.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open session log {}", path.display()))?;

        file.write_all(json.as_bytes())
            .context("Failed to write session record")?;
        file.flush().context("Failed to flush session log")?;

        Ok(())
    }
}
