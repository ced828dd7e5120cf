//! Leaderboard - final scores, best first, capped at ten entries.
//!
//! The engine only hands over a final score; this crate owns everything about
//! keeping it. Entries are ordered by score (highest first) and, for equal
//! scores, by submission time (earliest first). The list is stored as a plain
//! JSON array of `{ "name", "score", "ts" }` objects.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use block_blast_types as types;

use crate::types::{DEFAULT_PLAYER_NAME, LEADERBOARD_CAPACITY, MAX_NAME_CHARS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    /// Submission time, milliseconds since the Unix epoch.
    pub ts: u64,
}

impl LeaderboardEntry {
    pub fn new(name: &str, score: u32, ts: u64) -> Self {
        Self {
            name: normalize_name(name),
            score,
            ts,
        }
    }
}

/// Leaderboard order: score descending, then timestamp ascending.
pub fn rank_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score.cmp(&a.score).then(a.ts.cmp(&b.ts))
}

/// Trim a player-supplied name, fall back to "Anonymous" when blank, and
/// cap its length.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_CHARS).collect()
}

/// Milliseconds since the Unix epoch (0 if the clock is before it).
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries, restoring order and the size cap.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(rank_order);
        entries.truncate(LEADERBOARD_CAPACITY);
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score on the board, if any.
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// 0-based position `entry` would take, or `None` if it misses the cut.
    ///
    /// Ties on both score and timestamp go after existing entries.
    pub fn rank_of(&self, entry: &LeaderboardEntry) -> Option<usize> {
        let pos = self
            .entries
            .iter()
            .position(|e| rank_order(entry, e) == Ordering::Less)
            .unwrap_or(self.entries.len());
        (pos < LEADERBOARD_CAPACITY).then_some(pos)
    }

    /// Whether a new score submitted now would make the list.
    pub fn qualifies(&self, score: u32) -> bool {
        self.rank_of(&LeaderboardEntry::new("", score, u64::MAX)).is_some()
    }

    /// Insert a final score. Returns its 0-based rank, or `None` if it did not
    /// make the top ten (the list is unchanged in that case).
    pub fn submit(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let rank = self.rank_of(&entry)?;
        debug!(name = %entry.name, score = entry.score, rank, "leaderboard insert");
        self.entries.insert(rank, entry);
        self.entries.truncate(LEADERBOARD_CAPACITY);
        Some(rank)
    }

    /// Load from `path`. A missing file is an empty leaderboard.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no leaderboard file yet");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Self::from_entries(entries))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), entries = self.entries.len(), "saved leaderboard");
        Ok(())
    }
}
