//! Simulation configuration.

use crate::config::GameConfig;
use crate::constants::REFERENCE_FRAME_MS;

/// Configuration for a batch of simulated rounds.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = entropy)
    pub seed: Option<u64>,

    /// Frames per round before it counts as survived
    pub max_frames: u64,

    /// Fixed frame delta in milliseconds
    pub frame_ms: f64,

    /// Tunables handed to every round
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = progress every tenth of the batch,
    /// 2 = every run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_frames: 36_000,
            frame_ms: REFERENCE_FRAME_MS,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible batch.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_frames: 3_600,
            verbosity: 0,
            ..Default::default()
        }
    }
}
