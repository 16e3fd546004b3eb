//! Fixed-capacity particle pool.
//!
//! Slots are allocated up front and recycled through a free list. When every
//! slot is active, new allocations are dropped; active particles are never
//! evicted to make room.

use crate::constants::{PARTICLE_DEFAULT_LIFE_MS, REFERENCE_FRAME_MS};
use crate::render::{Color, DrawSink, SpriteDraw, SpriteId};

/// One pooled particle. Gravity and velocity are per reference frame.
#[derive(Debug, Clone)]
pub struct Particle {
    pub sprite: SpriteId,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub scale: f64,
    pub gravity_x: f64,
    pub gravity_y: f64,
    /// Velocity retained per reference frame.
    pub friction: f64,
    pub color: Color,
    /// Remaining life in milliseconds.
    pub life_ms: f64,
    active: bool,
}

impl Particle {
    fn idle() -> Self {
        Self {
            sprite: SpriteId::ParticlePuff,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            scale: 1.0,
            gravity_x: 0.0,
            gravity_y: 0.0,
            friction: 1.0,
            color: Color::WHITE,
            life_ms: 0.0,
            active: false,
        }
    }

    fn spawn(&mut self, sprite: SpriteId, x: f64, y: f64) {
        *self = Self {
            sprite,
            x,
            y,
            life_ms: PARTICLE_DEFAULT_LIFE_MS,
            active: true,
            ..Self::idle()
        };
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by `dt` ms. Returns false once the particle has expired.
    fn step(&mut self, dt: f64) -> bool {
        let frames = dt / REFERENCE_FRAME_MS;
        self.vx += self.gravity_x * frames;
        self.vy += self.gravity_y * frames;
        let decay = self.friction.max(0.0).powf(frames);
        self.vx *= decay;
        self.vy *= decay;
        self.x += self.vx * frames;
        self.y += self.vy * frames;
        self.life_ms -= dt;
        self.life_ms > 0.0
    }
}

pub struct ParticleSimulator {
    slots: Vec<Particle>,
    free: Vec<usize>,
}

impl ParticleSimulator {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| Particle::idle()).collect(),
            // Reversed so the lowest slot is handed out first.
            free: (0..capacity).rev().collect(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Claim a slot initialised with defaults, or `None` when the pool is full.
    pub fn alloc(&mut self, sprite: SpriteId, x: f64, y: f64) -> Option<&mut Particle> {
        let index = self.free.pop()?;
        let particle = &mut self.slots[index];
        particle.spawn(sprite, x, y);
        Some(particle)
    }

    pub fn update(&mut self, dt: f64) {
        for (index, particle) in self.slots.iter_mut().enumerate() {
            if particle.active && !particle.step(dt) {
                particle.active = false;
                self.free.push(index);
            }
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.active)
    }

    pub fn draw(&self, sink: &mut dyn DrawSink) {
        for p in self.active() {
            let (w, h) = p.sprite.size();
            sink.draw_sprite(
                SpriteDraw::at(p.sprite, p.x, p.y)
                    .origin(w / 2.0, h / 2.0)
                    .scale(p.scale)
                    .color(p.color),
            );
        }
    }
}
