//! Emission presets layered over the particle pool.

use super::simulator::ParticleSimulator;
use crate::render::{Color, DrawSink, SpriteId};
use rand::Rng;

/// Particle effects used by the game.
///
/// Each preset spawns a fixed number of particles with parameters drawn
/// uniformly from per-preset ranges. Allocations that hit a full pool are
/// silently skipped.
pub struct Particles {
    system: ParticleSimulator,
}

impl Particles {
    pub const FLAP_COUNT: usize = 4;
    pub const EXPLODE_COUNT: usize = 10;
    pub const TRAIL_COUNT: usize = 2;
    pub const CONFETTI_COUNT: usize = 5;

    pub fn new(capacity: usize) -> Self {
        Self {
            system: ParticleSimulator::new(capacity),
        }
    }

    pub fn system(&self) -> &ParticleSimulator {
        &self.system
    }

    pub fn update(&mut self, dt: f64) {
        self.system.update(dt);
    }

    pub fn render(&self, sink: &mut dyn DrawSink) {
        self.system.draw(sink);
    }

    /// Small puffs drifting back and down, left behind by a jump.
    pub fn flap<R: Rng>(&mut self, rng: &mut R, x: f64, y: f64) {
        for _ in 0..Self::FLAP_COUNT {
            if let Some(p) = self.system.alloc(SpriteId::ParticlePuff, x, y) {
                p.scale = rng.gen_range(0.1..1.0);
                p.gravity_x = -rng.gen_range(0.05..0.2);
                p.gravity_y = -rng.gen_range(0.1..0.3);
                p.friction = rng.gen_range(0.9..0.99);
                p.life_ms = rng.gen_range(500.0..800.0);
            }
        }
    }

    /// Burst on impact.
    pub fn explode<R: Rng>(&mut self, rng: &mut R, x: f64, y: f64) {
        for _ in 0..Self::EXPLODE_COUNT {
            if let Some(p) = self.system.alloc(SpriteId::ParticlePuff, x, y) {
                p.gravity_x = rng.gen_range(-0.1..0.1);
                p.gravity_y = -rng.gen_range(0.1..0.3);
                p.friction = rng.gen_range(0.9..0.99);
                p.life_ms = rng.gen_range(500.0..2000.0);
            }
        }
    }

    /// Short-lived specks behind a tumbling player.
    pub fn trail<R: Rng>(&mut self, rng: &mut R, x: f64, y: f64) {
        for _ in 0..Self::TRAIL_COUNT {
            if let Some(p) = self.system.alloc(SpriteId::ParticleSpeck, x, y) {
                p.life_ms = rng.gen_range(100.0..500.0);
                p.scale = rng.gen_range(0.1..1.0);
            }
        }
    }

    /// Large randomly tinted specks for a new best score.
    pub fn confetti<R: Rng>(&mut self, rng: &mut R, x: f64, y: f64) {
        for _ in 0..Self::CONFETTI_COUNT {
            if let Some(p) = self.system.alloc(SpriteId::ParticleSpeck, x, y) {
                p.scale = rng.gen_range(1.0..2.0);
                p.gravity_x = rng.gen_range(-0.1..0.1);
                p.gravity_y = -rng.gen_range(0.1..0.3);
                p.friction = rng.gen_range(0.9..0.99);
                p.life_ms = rng.gen_range(500.0..1000.0);
                p.color = Color::rgba(rng.gen(), rng.gen(), rng.gen(), 1.0);
            }
        }
    }
}
