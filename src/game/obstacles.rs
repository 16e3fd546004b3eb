//! Timed procedural pipe spawning.

use crate::config::GameConfig;
use crate::constants::{
    DOUBLE_PIPE_BOTTOM_MAX, DOUBLE_PIPE_BOTTOM_MIN, DOUBLE_PIPE_GAP_MAX, DOUBLE_PIPE_GAP_MIN,
    DOUBLE_PIPE_SPAN, SINGLE_PIPE_SIZE_MAX, SINGLE_PIPE_SIZE_MIN,
};
use crate::entities::Pipe;
use crate::render::Viewport;
use rand::Rng;

/// What a spawn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    Single { size: u32, flip: bool },
    /// Floor pipe plus a hidden ceiling pipe forming a gap.
    Double { bottom: u32, top: u32 },
}

#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    interval_ms: f64,
    speed: f64,
}

impl ObstacleGenerator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            interval_ms: config.spawn_interval_ms,
            speed: config.scroll_speed,
        }
    }

    /// Advance the spawn clock. Once it reaches the interval, the interval is
    /// subtracted (keeping any overshoot) and a new obstacle joins `pipes`.
    pub fn tick<R: Rng>(
        &self,
        timer: &mut f64,
        dt: f64,
        pipes: &mut Vec<Pipe>,
        viewport: &Viewport,
        rng: &mut R,
    ) -> Option<Spawn> {
        *timer += dt;
        if *timer < self.interval_ms {
            return None;
        }
        *timer -= self.interval_ms;

        let spawn = self.spawn(pipes, viewport, rng);
        log::debug!("spawned {:?}, {} pipes live", spawn, pipes.len());
        Some(spawn)
    }

    /// Add one obstacle at the right edge of the view.
    pub fn spawn<R: Rng>(&self, pipes: &mut Vec<Pipe>, viewport: &Viewport, rng: &mut R) -> Spawn {
        let x = viewport.width + Pipe::width();

        if rng.gen_bool(0.5) {
            let bottom = rng.gen_range(DOUBLE_PIPE_BOTTOM_MIN..=DOUBLE_PIPE_BOTTOM_MAX);
            let gap = rng.gen_range(DOUBLE_PIPE_GAP_MIN..=DOUBLE_PIPE_GAP_MAX);
            // span - (bottom - gap), ordered to stay unsigned
            let top = DOUBLE_PIPE_SPAN + gap - bottom;

            pipes.push(Pipe::new(bottom, false, x, self.speed));
            let mut ceiling = Pipe::new(top, true, x, self.speed);
            ceiling.hidden = true;
            pipes.push(ceiling);

            Spawn::Double { bottom, top }
        } else {
            let size = rng.gen_range(SINGLE_PIPE_SIZE_MIN..=SINGLE_PIPE_SIZE_MAX);
            let flip = rng.gen_bool(0.5);
            pipes.push(Pipe::new(size, flip, x, self.speed));

            Spawn::Single { size, flip }
        }
    }
}
