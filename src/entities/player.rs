//! The player sprite: gravity, jumps, and the post-hit tumble.

use super::Drawable;
use crate::config::GameConfig;
use crate::constants::{PLAYER_HITBOX_HEIGHT, PLAYER_HITBOX_WIDTH, REFERENCE_FRAME_MS};
use crate::geometry::{Rect, Vec2};
use crate::particles::Particles;
use crate::render::{DrawSink, SpriteDraw, SpriteId, Viewport};
use rand::Rng;

/// Physics tuning copied out of [`GameConfig`] at construction.
#[derive(Debug, Clone, Copy)]
struct PlayerTuning {
    gravity: f64,
    jump_impulse: f64,
    angular_friction: f64,
    jump_spin: f64,
    hit_spin: f64,
    hit_knockback: (f64, f64),
    grace_ms: f64,
    trail_chance: f64,
}

impl From<&GameConfig> for PlayerTuning {
    fn from(config: &GameConfig) -> Self {
        Self {
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            angular_friction: config.angular_friction,
            jump_spin: config.jump_spin,
            hit_spin: config.hit_spin,
            hit_knockback: config.hit_knockback,
            grace_ms: config.grace_ms,
            trail_chance: config.trail_chance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing angle in degrees.
    pub angle: f64,
    /// Degrees per millisecond.
    pub angular_velocity: f64,
    pub gravity_factor: f64,
    pub friction_factor: f64,
    /// Set by [`Player::hit`]; the player tumbles until the round resets.
    pub hitted: bool,
    /// Remaining collision grace in milliseconds.
    pub grace_ms: f64,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let tuning = PlayerTuning::from(config);
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            gravity_factor: 1.0,
            friction_factor: 1.0,
            hitted: false,
            grace_ms: tuning.grace_ms,
            tuning,
        }
    }

    /// Restore physics state for a new round and restart the grace window.
    /// Position is left to the caller.
    pub fn reset(&mut self) {
        self.gravity_factor = 1.0;
        self.friction_factor = 1.0;
        self.angular_velocity = 0.0;
        self.angle = 0.0;
        self.grace_ms = self.tuning.grace_ms;
        self.velocity = Vec2::ZERO;
        self.hitted = false;
    }

    /// Integrate `dt` milliseconds of motion.
    ///
    /// Gravity is constant over the step and angular velocity decays
    /// exponentially, both integrated in closed form, so one call with `dt = T`
    /// lands on the same state as any split of `T` into smaller steps.
    pub fn integrate(&mut self, dt: f64) {
        let dt = dt.max(0.0);

        let accel = self.tuning.gravity * self.gravity_factor / REFERENCE_FRAME_MS;
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt - 0.5 * accel * dt * dt;
        self.velocity.y -= accel * dt;

        let retain = self.tuning.angular_friction * self.friction_factor;
        if retain <= 0.0 {
            self.angular_velocity = 0.0;
        } else if (retain - 1.0).abs() < f64::EPSILON {
            self.angle += self.angular_velocity * dt;
        } else {
            let decay_rate = -retain.ln() / REFERENCE_FRAME_MS;
            let decay = (-decay_rate * dt).exp();
            self.angle += self.angular_velocity * (1.0 - decay) / decay_rate;
            self.angular_velocity *= decay;
        }

        self.grace_ms = (self.grace_ms - dt).max(0.0);
    }

    /// Per-frame update: motion plus the trail left while tumbling.
    pub fn update<R: Rng>(&mut self, dt: f64, fx: &mut Particles, rng: &mut R) {
        self.integrate(dt);
        if self.hitted && rng.gen_bool(self.tuning.trail_chance.clamp(0.0, 1.0)) {
            fx.trail(rng, self.position.x, self.position.y);
        }
    }

    pub fn jump<R: Rng>(&mut self, force: f64, fx: &mut Particles, rng: &mut R) {
        self.velocity.y = self.tuning.jump_impulse * force;
        self.angular_velocity += self.tuning.jump_spin;

        let next = self.extrapolate();
        fx.flap(rng, next.x, next.y);
    }

    /// Knock the player out: explosion, knockback, and a hard spin.
    pub fn hit<R: Rng>(&mut self, fx: &mut Particles, rng: &mut R) {
        self.hitted = true;
        fx.explode(rng, self.position.x, self.position.y);

        let (kx, ky) = self.tuning.hit_knockback;
        self.velocity.set(kx, ky);
        self.angular_velocity = self.tuning.hit_spin;
    }

    /// Collision test against an obstacle. Always false during the grace window.
    pub fn collides(&self, other: &Rect) -> bool {
        if self.grace_ms > 0.0 {
            return false;
        }
        self.rect().intersects(other)
    }

    /// Hitbox centered on the position.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x - PLAYER_HITBOX_WIDTH / 2.0,
            self.position.y - PLAYER_HITBOX_HEIGHT / 2.0,
            PLAYER_HITBOX_WIDTH,
            PLAYER_HITBOX_HEIGHT,
        )
    }

    /// Where the player will be one reference frame from now.
    fn extrapolate(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.velocity.x * REFERENCE_FRAME_MS,
            self.position.y + self.velocity.y * REFERENCE_FRAME_MS,
        )
    }
}

impl Drawable for Player {
    fn draw(&self, sink: &mut dyn DrawSink, _viewport: &Viewport) {
        let (w, h) = SpriteId::Player.size();
        sink.draw_sprite(
            SpriteDraw::at(SpriteId::Player, self.position.x, self.position.y)
                .origin(w / 2.0, h / 2.0)
                .rotation(self.angle),
        );
    }

    fn debug_draw(&self, sink: &mut dyn DrawSink) {
        sink.debug_rect(self.rect());
    }
}
