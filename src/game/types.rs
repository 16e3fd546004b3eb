//! Game flow state.

use crate::constants::{BANNER_BOB_AMPLITUDE, BANNER_CLOCK_RATE};

/// Which part of the game flow is active. Exactly one per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first jump. Only idle visuals animate.
    Title,
    Playing,
    /// Simulation suspended; rendering continues.
    Paused,
    /// The round ended. The player keeps falling until it leaves the world.
    GameOver,
}

/// Everything about the current session that is not an entity.
///
/// Presentation reads this to decide which banners and counters to show.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub score: u32,
    pub best: u32,
    /// Obstacle spawn clock in milliseconds.
    pub timer: f64,
    /// Time spent on the game-over screen.
    pub game_over_ms: f64,
    /// The round that just ended set a new best.
    pub new_best: bool,
    /// Collision rectangles are drawn.
    pub debug: bool,
    /// Obstacle spawns this round (a double pipe counts once).
    pub spawns: u32,
    /// Drives the banner bob animation.
    pub banner_clock: f64,
}

impl GameState {
    pub fn new(best: u32) -> Self {
        Self {
            phase: Phase::Title,
            score: 0,
            best,
            timer: 0.0,
            game_over_ms: 0.0,
            new_best: false,
            debug: false,
            spawns: 0,
            banner_clock: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Vertical banner displacement for title/game-over art.
    pub fn banner_bob(&self) -> f64 {
        BANNER_BOB_AMPLITUDE * (self.banner_clock / 2.0).sin()
    }

    pub(crate) fn advance_banner(&mut self, dt: f64) {
        self.banner_clock += BANNER_CLOCK_RATE * dt;
    }

    /// Line shown under the game-over banner.
    pub fn best_score_text(&self) -> String {
        if self.new_best {
            format!("New Best Score: {}", self.score)
        } else {
            format!("Best Score: {}", self.best)
        }
    }
}
