//! Store trait, shared best-score bookkeeping and the in-memory store.

use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};

/// One player's best score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
}

/// What [`ScoreStore::record`] did with a submitted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// First score for this player.
    Inserted,
    /// The new score beat the stored one.
    Improved { previous: u64 },
    /// The stored score was higher or equal and was kept.
    Kept { best: u64 },
}

/// A key-value store of best scores keyed by player name.
pub trait ScoreStore {
    /// Submit a finished game. Only a strictly higher score replaces the
    /// stored one.
    fn record(&mut self, name: &str, score: u64) -> ScoreResult<RecordOutcome>;

    fn best(&self, name: &str) -> ScoreResult<Option<ScoreEntry>>;

    /// Every player, highest score first; equal scores sort by name.
    fn leaderboard(&self) -> ScoreResult<Vec<ScoreEntry>>;
}

/// Best-score table shared by the store implementations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    scores: BTreeMap<String, u64>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn record(&mut self, name: &str, score: u64) -> ScoreResult<RecordOutcome> {
        let name = normalize_name(name)?;
        let outcome = match self.scores.get(name) {
            None => {
                self.scores.insert(name.to_string(), score);
                info!("player '{}' with score {} added", name, score);
                RecordOutcome::Inserted
            }
            Some(&previous) if score > previous => {
                self.scores.insert(name.to_string(), score);
                info!("updated score for player '{}' to {} (was {})", name, score, previous);
                RecordOutcome::Improved { previous }
            }
            Some(&best) => {
                debug!(
                    "player '{}' already has a higher or equal score ({})",
                    name, best
                );
                RecordOutcome::Kept { best }
            }
        };
        Ok(outcome)
    }

    pub fn best(&self, name: &str) -> Option<ScoreEntry> {
        let name = name.trim();
        self.scores.get(name).map(|&score| ScoreEntry {
            name: name.to_string(),
            score,
        })
    }

    pub fn entries(&self) -> Vec<ScoreEntry> {
        let mut entries: Vec<ScoreEntry> = self
            .scores
            .iter()
            .map(|(name, &score)| ScoreEntry {
                name: name.clone(),
                score,
            })
            .collect();
        // BTreeMap iteration is already name-ordered, so a stable sort keeps
        // ties alphabetical.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }

    /// Merge an entry loaded from storage, keeping the higher score on
    /// duplicates. Blank names are skipped.
    pub(crate) fn absorb(&mut self, entry: ScoreEntry) {
        let Ok(name) = normalize_name(&entry.name) else {
            return;
        };
        let slot = self.scores.entry(name.to_string()).or_insert(entry.score);
        *slot = (*slot).max(entry.score);
    }
}

fn normalize_name(name: &str) -> ScoreResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScoreError::EmptyName);
    }
    Ok(name)
}

/// Scores kept for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Leaderboard,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn record(&mut self, name: &str, score: u64) -> ScoreResult<RecordOutcome> {
        self.board.record(name, score)
    }

    fn best(&self, name: &str) -> ScoreResult<Option<ScoreEntry>> {
        Ok(self.board.best(name))
    }

    fn leaderboard(&self) -> ScoreResult<Vec<ScoreEntry>> {
        Ok(self.board.entries())
    }
}
