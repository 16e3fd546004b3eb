//! Best-score persistence.
//!
//! The game keeps a single scalar between sessions. The on-disk record carries
//! a SHA256 checksum so hand-edited or truncated files read back as "no best".

use crate::constants::BEST_SCORE_FILE;
use crate::utils::persistence::{load_json_from_or_default, save_json_to, save_path};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io;
use std::path::PathBuf;

/// Persistence collaborator for the best score.
pub trait ScoreStore {
    /// Stored best, 0 when nothing usable is stored.
    fn load_best(&self) -> u32;

    fn store_best(&mut self, best: u32) -> io::Result<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BestScoreRecord {
    best: u32,
    /// Unix timestamp (seconds) of when the record was set.
    achieved_at: i64,
    checksum: String,
}

impl BestScoreRecord {
    fn new(best: u32, achieved_at: i64) -> Self {
        Self {
            best,
            achieved_at,
            checksum: Self::checksum_for(best, achieved_at),
        }
    }

    fn checksum_for(best: u32, achieved_at: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(best.to_le_bytes());
        hasher.update(achieved_at.to_le_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn is_valid(&self) -> bool {
        self.checksum == Self::checksum_for(self.best, self.achieved_at)
    }
}

/// Stores the best score as checksummed JSON.
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Store at ~/.flappberry/best.json.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: save_path(BEST_SCORE_FILE)?,
        })
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ScoreStore for JsonScoreStore {
    fn load_best(&self) -> u32 {
        if !self.path.exists() {
            return 0;
        }
        let record: BestScoreRecord = load_json_from_or_default(&self.path);
        if record.is_valid() {
            record.best
        } else {
            log::warn!(
                "best score record at {} failed verification, ignoring it",
                self.path.display()
            );
            0
        }
    }

    fn store_best(&mut self, best: u32) -> io::Result<()> {
        let record = BestScoreRecord::new(best, Utc::now().timestamp());
        save_json_to(&self.path, &record)
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub best: u32,
    /// Number of successful `store_best` calls.
    pub writes: u32,
}

impl MemoryScoreStore {
    pub fn with_best(best: u32) -> Self {
        Self { best, writes: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best(&self) -> u32 {
        self.best
    }

    fn store_best(&mut self, best: u32) -> io::Result<()> {
        self.best = best;
        self.writes += 1;
        Ok(())
    }
}
