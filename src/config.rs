//! Tunable game parameters, loaded from ~/.flappberry/config.json.

use crate::constants::CONFIG_FILE;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};

/// Gameplay tuning. Missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds between obstacle spawns.
    pub spawn_interval_ms: f64,
    /// Horizontal pipe velocity in units per millisecond (negative = leftward).
    pub scroll_speed: f64,
    /// Downward velocity lost per reference frame.
    pub gravity: f64,
    /// Vertical velocity set by a full-force jump (units/ms).
    pub jump_impulse: f64,
    /// Angular velocity retained per reference frame.
    pub angular_friction: f64,
    /// Angular impulse of a jump, degrees/ms (negative = nose up).
    pub jump_spin: f64,
    /// Angular velocity after a hit, degrees/ms.
    pub hit_spin: f64,
    /// Velocity after a hit (units/ms).
    pub hit_knockback: (f64, f64),
    /// Collision grace window after a round starts.
    pub grace_ms: f64,
    /// Minimum time the game-over screen stays up before a jump restarts.
    pub game_over_delay_ms: f64,
    pub particle_capacity: usize,
    /// Per-update chance for a knocked-out player to leave a trail puff.
    pub trail_chance: f64,
    /// Fixed RNG seed. None seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 2000.0,
            scroll_speed: -0.1,
            gravity: 0.02,
            jump_impulse: 0.4,
            angular_friction: 0.9,
            jump_spin: -2.5,
            hit_spin: 100.0,
            hit_knockback: (0.1, 0.4),
            grace_ms: 100.0,
            game_over_delay_ms: 500.0,
            particle_capacity: 2048,
            trail_chance: 0.3,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from the user's config file, defaulting when absent or invalid.
    pub fn load() -> Self {
        load_json_or_default(CONFIG_FILE)
    }
}
