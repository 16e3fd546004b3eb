//! Draw-sink collaborator types.
//!
//! The simulation never owns a graphics device. Every frame it describes the
//! scene as a list of positioned sprite draws (plus optional debug rectangles)
//! handed to a [`DrawSink`]. Hosts decide how to present them.

use crate::constants::{CAMERA_ZOOM, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use crate::geometry::Rect;
use std::io;

/// Texture handles known to the game. Dimensions come from the sprite atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    PipeBody,
    PipeHead,
    Ground,
    /// Parallax layers, 0 is the farthest.
    Background(u8),
    /// Round flap/explosion puff.
    ParticlePuff,
    /// Small square used for trails and confetti.
    ParticleSpeck,
}

impl SpriteId {
    /// Atlas size (width, height) in world units.
    pub fn size(&self) -> (f64, f64) {
        match self {
            Self::Player => (18.0, 18.0),
            Self::PipeBody | Self::PipeHead => (24.0, 24.0),
            Self::Ground => (48.0, 60.0),
            Self::Background(0) => (96.0, 200.0),
            Self::Background(1) => (96.0, 180.0),
            Self::Background(_) => (96.0, 160.0),
            Self::ParticlePuff => (4.0, 4.0),
            Self::ParticleSpeck => (2.0, 2.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.size().0
    }

    pub fn height(&self) -> f64 {
        self.size().1
    }
}

/// RGBA tint, components in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Quantize to 8-bit channels.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One sprite draw call.
///
/// The sprite's bottom-left corner lands at `(x - origin_x * scale,
/// y - origin_y * scale)`; rotation (degrees) pivots around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub sprite: SpriteId,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub flip_x: bool,
    pub flip_y: bool,
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
    pub color: Color,
}

impl SpriteDraw {
    pub fn at(sprite: SpriteId, x: f64, y: f64) -> Self {
        Self {
            sprite,
            x,
            y,
            rotation: 0.0,
            flip_x: false,
            flip_y: false,
            origin_x: 0.0,
            origin_y: 0.0,
            scale: 1.0,
            color: Color::WHITE,
        }
    }

    pub fn origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// World-space rectangle covered by this draw, ignoring rotation.
    pub fn bounds(&self) -> Rect {
        let (w, h) = self.sprite.size();
        Rect::new(
            self.x - self.origin_x * self.scale,
            self.y - self.origin_y * self.scale,
            w * self.scale,
            h * self.scale,
        )
    }
}

/// Receives the scene description for one frame.
pub trait DrawSink {
    fn draw_sprite(&mut self, draw: SpriteDraw);

    /// Collision-rectangle overlay, only called while the debug view is on.
    fn debug_rect(&mut self, _rect: Rect) {}
}

/// Sink that keeps every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub sprites: Vec<SpriteDraw>,
    pub debug_rects: Vec<Rect>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
        self.debug_rects.clear();
    }

    pub fn count_of(&self, sprite: SpriteId) -> usize {
        self.sprites.iter().filter(|d| d.sprite == sprite).count()
    }
}

impl DrawSink for RecordingSink {
    fn draw_sprite(&mut self, draw: SpriteDraw) {
        self.sprites.push(draw);
    }

    fn debug_rect(&mut self, rect: Rect) {
        self.debug_rects.push(rect);
    }
}

/// Visible world area before camera zoom.
///
/// Behaves like an extend viewport: the virtual 120x420 area is always
/// visible and one axis grows to match the output aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIRTUAL_WIDTH,
            height: VIRTUAL_HEIGHT,
        }
    }
}

impl Viewport {
    /// Fit the virtual area into an output of `pixel_width` x `pixel_height`.
    pub fn extend(pixel_width: f64, pixel_height: f64) -> Self {
        if pixel_width <= 0.0 || pixel_height <= 0.0 {
            return Self::default();
        }
        let aspect = pixel_width / pixel_height;
        if aspect > VIRTUAL_WIDTH / VIRTUAL_HEIGHT {
            Self {
                width: VIRTUAL_HEIGHT * aspect,
                height: VIRTUAL_HEIGHT,
            }
        } else {
            Self {
                width: VIRTUAL_WIDTH,
                height: VIRTUAL_WIDTH / aspect,
            }
        }
    }

    pub fn left(&self) -> f64 {
        -self.width / 2.0
    }

    /// World bounds actually shown by the zoomed camera: (x_min, x_max, y_min, y_max).
    pub fn camera_bounds(&self) -> (f64, f64, f64, f64) {
        let half_w = self.width * CAMERA_ZOOM / 2.0;
        let half_h = self.height * CAMERA_ZOOM / 2.0;
        (-half_w, half_w, -half_h, half_h)
    }
}

/// Outcome of acquiring/presenting the output surface for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceStatus {
    Success,
    Timeout,
    Outdated,
    Lost,
    Fatal(String),
}

impl SurfaceStatus {
    /// Classify a presentation error reported by the host backend.
    pub fn from_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut => Self::Timeout,
            io::ErrorKind::WouldBlock => Self::Outdated,
            io::ErrorKind::Interrupted => Self::Lost,
            _ => Self::Fatal(err.to_string()),
        }
    }

    /// Transient statuses skip the frame and leave the session running.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Outdated | Self::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_bounds_respect_origin_and_scale() {
        let draw = SpriteDraw::at(SpriteId::Player, 10.0, 20.0)
            .origin(9.0, 9.0)
            .scale(2.0);
        let b = draw.bounds();
        assert!((b.x - -8.0).abs() < 1e-9);
        assert!((b.y - 2.0).abs() < 1e-9);
        assert!((b.width - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_recording_sink_counts() {
        let mut sink = RecordingSink::new();
        sink.draw_sprite(SpriteDraw::at(SpriteId::PipeBody, 0.0, 0.0));
        sink.draw_sprite(SpriteDraw::at(SpriteId::PipeBody, 0.0, 24.0));
        sink.draw_sprite(SpriteDraw::at(SpriteId::PipeHead, 0.0, 48.0));
        sink.debug_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(sink.count_of(SpriteId::PipeBody), 2);
        assert_eq!(sink.count_of(SpriteId::PipeHead), 1);
        assert_eq!(sink.debug_rects.len(), 1);

        sink.clear();
        assert!(sink.sprites.is_empty());
        assert!(sink.debug_rects.is_empty());
    }

    #[test]
    fn test_viewport_extends_wide_outputs() {
        let vp = Viewport::extend(800.0, 420.0);
        assert!((vp.height - VIRTUAL_HEIGHT).abs() < 1e-9);
        assert!(vp.width > VIRTUAL_WIDTH);
    }

    #[test]
    fn test_viewport_extends_tall_outputs() {
        let vp = Viewport::extend(120.0, 1000.0);
        assert!((vp.width - VIRTUAL_WIDTH).abs() < 1e-9);
        assert!(vp.height > VIRTUAL_HEIGHT);
    }

    #[test]
    fn test_viewport_degenerate_output_falls_back() {
        assert_eq!(Viewport::extend(0.0, 10.0), Viewport::default());
    }

    #[test]
    fn test_surface_status_classification() {
        let timeout = io::Error::new(io::ErrorKind::TimedOut, "slow");
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert_eq!(SurfaceStatus::from_error(&timeout), SurfaceStatus::Timeout);
        assert!(SurfaceStatus::from_error(&timeout).is_transient());
        assert!(!SurfaceStatus::from_error(&broken).is_transient());
        assert!(matches!(
            SurfaceStatus::from_error(&broken),
            SurfaceStatus::Fatal(_)
        ));
    }
}
