//! Kinematic entities: the player, pipes, and the scrolling scenery.
//!
//! Entities share no base state. Each one implements the capabilities it
//! needs: [`Scroll`] for constant-velocity updates and [`Drawable`] for
//! emitting sprite draws and debug rectangles.

pub mod pipe;
pub mod player;
pub mod scenery;

pub use pipe::Pipe;
pub use player::Player;
pub use scenery::{Background, Ground};

use crate::render::{DrawSink, Viewport};

/// Advance an entity that needs nothing but the frame delta.
pub trait Scroll {
    fn update(&mut self, dt: f64);
}

pub trait Drawable {
    fn draw(&self, sink: &mut dyn DrawSink, viewport: &Viewport);

    /// Outline the entity's collision rectangle, if it has one.
    fn debug_draw(&self, _sink: &mut dyn DrawSink) {}
}
