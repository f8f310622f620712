//! JSON file store
//!
//! Scores live in a single JSON document:
//!
//! ```text
//! {"version":1,"scores":[{"name":"ada","score":2048}]}
//! ```
//!
//! A missing file is an empty leaderboard. Every successful `record` that
//! changes the table rewrites the whole file: the document is written to a
//! sibling `.tmp` file and renamed over the original, so a crash mid-write
//! leaves the previous file intact.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};
use crate::store::{Leaderboard, RecordOutcome, ScoreEntry, ScoreStore};

/// On-disk format version written by this crate.
pub const SCORE_FILE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    version: u32,
    #[serde(default)]
    scores: Vec<ScoreEntry>,
}

/// Best scores persisted to a JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    board: Leaderboard,
}

impl JsonFileStore {
    /// Load the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> ScoreResult<Self> {
        let path = path.into();
        let mut board = Leaderboard::new();

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: ScoreFile = serde_json::from_str(&contents)?;
            if file.version != SCORE_FILE_VERSION {
                return Err(ScoreError::UnsupportedVersion {
                    found: file.version,
                });
            }
            for entry in file.scores {
                board.absorb(entry);
            }
            info!("loaded {} scores from {:?}", board.len(), path);
        } else {
            info!("no score file at {:?}, starting empty", path);
        }

        Ok(Self { path, board })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, board: &Leaderboard) -> ScoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = ScoreFile {
            version: SCORE_FILE_VERSION,
            scores: board.entries(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            warn!("failed to move {:?} into place: {}", tmp, e);
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    /// The in-memory table only changes once the file has been written, so a
    /// failed save can be retried by recording the same score again.
    fn record(&mut self, name: &str, score: u64) -> ScoreResult<RecordOutcome> {
        let mut next = self.board.clone();
        let outcome = next.record(name, score)?;
        if !matches!(outcome, RecordOutcome::Kept { .. }) {
            self.save(&next)?;
            self.board = next;
        }
        Ok(outcome)
    }

    fn best(&self, name: &str) -> ScoreResult<Option<ScoreEntry>> {
        Ok(self.board.best(name))
    }

    fn leaderboard(&self) -> ScoreResult<Vec<ScoreEntry>> {
        Ok(self.board.entries())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "scores.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
