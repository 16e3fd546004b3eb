//! Pipe obstacles.

use super::{Drawable, Scroll};
use crate::constants::{
    PIPE_ANCHOR_Y, PIPE_HEAD_ORIGIN_FACTOR, PIPE_REMOVAL_MARGIN, PIPE_WIDTH_DIVISOR,
};
use crate::geometry::{Rect, Vec2};
use crate::render::{DrawSink, SpriteDraw, SpriteId, Viewport};

#[derive(Debug, Clone)]
pub struct Pipe {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Number of stacked segments (body segments plus the head).
    pub size: u32,
    /// Hangs from the ceiling instead of standing on the floor.
    pub flip: bool,
    /// Excluded from scoring.
    pub hidden: bool,
    /// Already counted toward the score.
    pub collected: bool,
    /// Scrolled out of view; dropped at the end of the update.
    pub removed: bool,
}

impl Pipe {
    /// Build a pipe anchored to the floor (or ceiling when `flip`), at `x`.
    pub fn new(size: u32, flip: bool, x: f64, speed: f64) -> Self {
        let mut pipe = Self {
            position: Vec2::new(x, 0.0),
            velocity: Vec2::new(speed, 0.0),
            size,
            flip,
            hidden: false,
            collected: false,
            removed: false,
        };
        pipe.anchor();
        pipe
    }

    pub fn width() -> f64 {
        SpriteId::PipeBody.width() / PIPE_WIDTH_DIVISOR
    }

    pub fn height(&self) -> f64 {
        SpriteId::PipeBody.height() * self.size as f64
    }

    /// Fix the vertical position from size and orientation.
    pub fn anchor(&mut self) {
        self.position.y = if self.flip {
            PIPE_ANCHOR_Y - self.height()
        } else {
            -PIPE_ANCHOR_Y
        };
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            Self::width(),
            self.height(),
        )
    }

    pub fn right_edge(&self) -> f64 {
        self.position.x + Self::width()
    }

    /// Fully past the left edge of the view, margin included.
    pub fn is_off_screen(&self, viewport: &Viewport) -> bool {
        self.position.x + Self::width() * PIPE_REMOVAL_MARGIN < viewport.left()
    }
}

impl Scroll for Pipe {
    fn update(&mut self, dt: f64) {
        self.position.x += self.velocity.x * dt;
    }
}

impl Drawable for Pipe {
    fn draw(&self, sink: &mut dyn DrawSink, _viewport: &Viewport) {
        let segment = SpriteId::PipeBody.height();
        let origin_x = Self::width() * PIPE_HEAD_ORIGIN_FACTOR;
        // Upright pipes put the head on top; hanging pipes at the bottom.
        let dir = if self.flip { 0.0 } else { 1.0 };
        let stack = self.size.saturating_sub(1);

        sink.draw_sprite(
            SpriteDraw::at(
                SpriteId::PipeHead,
                self.position.x,
                self.position.y + stack as f64 * dir * segment,
            )
            .flip_y(self.flip)
            .origin(origin_x, 0.0),
        );

        for i in 0..stack {
            sink.draw_sprite(
                SpriteDraw::at(
                    SpriteId::PipeBody,
                    self.position.x,
                    self.position.y + (i as f64 + 1.0 - dir) * segment,
                )
                .origin(origin_x, 0.0),
            );
        }
    }

    fn debug_draw(&self, sink: &mut dyn DrawSink) {
        sink.debug_rect(self.rect());
    }
}
