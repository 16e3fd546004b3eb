//! Tiled scrolling scenery: parallax backgrounds and the two ground strips.
//!
//! Neither moves in world space. Scrolling is a wrap offset handed to the
//! renderer as the tiles' horizontal draw origin, which slides the whole row
//! of tiles by less than a tile width and snaps back once a full wrap span
//! has passed.

use super::{Drawable, Scroll};
use crate::constants::{
    BACKGROUND_LAYERS, BACKGROUND_WRAP_TILES, BOTTOM_GROUND_Y, GROUND_SCROLL_SPEED,
    GROUND_WRAP_TILES, TILE_SEAM, TOP_GROUND_Y, VIRTUAL_HEIGHT, VIRTUAL_WIDTH,
};
use crate::geometry::{Rect, Vec2};
use crate::render::{DrawSink, SpriteDraw, SpriteId, Viewport};

/// Wrap offset shared by backgrounds and grounds.
#[derive(Debug, Clone, Copy, Default)]
struct WrapOffset {
    value: f64,
}

impl WrapOffset {
    /// The reset check runs before accumulating, so the offset may overshoot
    /// the span by one step before snapping back to zero.
    fn advance(&mut self, delta: f64, span: f64) {
        if self.value > span {
            self.value = 0.0;
        }
        self.value += delta;
    }
}

/// Tile draws covering the view plus spare tiles for the wrap slide.
///
/// The row slides left by up to `wrap_tiles` tile widths before snapping
/// back, so one spare tile per wrapped width plus one for the partial tile
/// keeps the right edge covered. Backgrounds wrap over one tile and get two
/// spares; grounds wrap over three and get four.
fn draw_tiles(
    sink: &mut dyn DrawSink,
    viewport: &Viewport,
    sprite: SpriteId,
    y: f64,
    offset: f64,
    flip_y: bool,
    wrap_tiles: f64,
) {
    let width = sprite.width();
    let count = (viewport.width / width) as usize + 1 + wrap_tiles.ceil() as usize;
    for i in 0..count {
        sink.draw_sprite(
            SpriteDraw::at(sprite, viewport.left() + i as f64 * (width - TILE_SEAM), y)
                .flip_y(flip_y)
                .origin(offset, 0.0),
        );
    }
}

#[derive(Debug, Clone)]
pub struct Background {
    pub sprite: SpriteId,
    pub position: Vec2,
    pub velocity: Vec2,
    offset: WrapOffset,
}

impl Background {
    pub fn new(sprite: SpriteId, position: Vec2, velocity: Vec2) -> Self {
        Self {
            sprite,
            position,
            velocity,
            offset: WrapOffset::default(),
        }
    }

    /// The three parallax layers, far to near.
    pub fn layers() -> [Background; 3] {
        let layer = |index: u8| {
            let (divisor, speed) = BACKGROUND_LAYERS[index as usize];
            Background::new(
                SpriteId::Background(index),
                Vec2::new(-VIRTUAL_WIDTH / 2.0, -VIRTUAL_HEIGHT / divisor),
                Vec2::new(speed, 0.0),
            )
        };
        [layer(0), layer(1), layer(2)]
    }

    pub fn offset(&self) -> f64 {
        self.offset.value
    }
}

impl Scroll for Background {
    fn update(&mut self, dt: f64) {
        self.offset.advance(
            self.velocity.x * dt,
            self.sprite.width() * BACKGROUND_WRAP_TILES,
        );
    }
}

impl Drawable for Background {
    fn draw(&self, sink: &mut dyn DrawSink, viewport: &Viewport) {
        draw_tiles(
            sink,
            viewport,
            self.sprite,
            self.position.y,
            self.offset.value,
            false,
            BACKGROUND_WRAP_TILES,
        );
    }
}

/// Floor or ceiling strip. Collides like an obstacle.
#[derive(Debug, Clone)]
pub struct Ground {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Ceiling strips are drawn upside down.
    pub flip: bool,
    offset: WrapOffset,
}

impl Ground {
    pub fn new(flip: bool, y: f64) -> Self {
        Self {
            position: Vec2::new(-VIRTUAL_WIDTH / 2.0, y),
            velocity: Vec2::new(GROUND_SCROLL_SPEED, 0.0),
            flip,
            offset: WrapOffset::default(),
        }
    }

    /// Ceiling then floor.
    pub fn pair() -> [Ground; 2] {
        [Ground::new(true, TOP_GROUND_Y), Ground::new(false, BOTTOM_GROUND_Y)]
    }

    pub fn rect(&self) -> Rect {
        let (w, h) = SpriteId::Ground.size();
        Rect::new(
            self.position.x - w / 2.0,
            self.position.y,
            w * GROUND_WRAP_TILES,
            h,
        )
    }

    pub fn offset(&self) -> f64 {
        self.offset.value
    }
}

impl Scroll for Ground {
    fn update(&mut self, dt: f64) {
        self.offset.advance(
            self.velocity.x * dt,
            SpriteId::Ground.width() * GROUND_WRAP_TILES,
        );
    }
}

impl Drawable for Ground {
    fn draw(&self, sink: &mut dyn DrawSink, viewport: &Viewport) {
        draw_tiles(
            sink,
            viewport,
            SpriteId::Ground,
            self.position.y,
            self.offset.value,
            self.flip,
            GROUND_WRAP_TILES,
        );
    }

    fn debug_draw(&self, sink: &mut dyn DrawSink) {
        sink.debug_rect(self.rect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSink;

    #[test]
    fn test_background_offset_wraps_after_one_tile() {
        let mut bg = Background::new(SpriteId::Background(0), Vec2::ZERO, Vec2::new(0.1, 0.0));
        let width = SpriteId::Background(0).width();

        // 96 units at 0.1/ms: just under one tile after 950 ms
        bg.update(950.0);
        assert!((bg.offset() - 95.0).abs() < 1e-9);
        bg.update(20.0);
        assert!(bg.offset() > width);
        bg.update(10.0);
        assert!((bg.offset() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ground_offset_wraps_after_three_tiles() {
        let mut ground = Ground::new(false, BOTTOM_GROUND_Y);
        let span = SpriteId::Ground.width() * GROUND_WRAP_TILES;

        ground.update(span / GROUND_SCROLL_SPEED + 10.0);
        assert!(ground.offset() > span);
        ground.update(10.0);
        assert!((ground.offset() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ground_does_not_move_in_world_space() {
        let mut ground = Ground::new(true, TOP_GROUND_Y);
        let before = ground.rect();
        ground.update(5000.0);
        assert_eq!(ground.rect(), before);
    }

    #[test]
    fn test_ground_rect_covers_view() {
        let viewport = Viewport::default();
        for ground in Ground::pair() {
            let r = ground.rect();
            assert!(r.x <= viewport.left());
            assert!(r.x2() >= -viewport.left());
        }
    }

    #[test]
    fn test_background_tile_count_covers_view_plus_two() {
        let viewport = Viewport::default();
        let bg = &Background::layers()[0];
        let mut sink = RecordingSink::new();
        bg.draw(&mut sink, &viewport);
        let expected = (viewport.width / bg.sprite.width()) as usize + 2;
        assert_eq!(sink.sprites.len(), expected);
        assert!(sink.sprites.iter().all(|d| (d.origin_x - bg.offset()).abs() < 1e-9));
        assert!(sink.debug_rects.is_empty());
    }

    #[test]
    fn test_ground_tile_count_covers_wrap_slide() {
        let viewport = Viewport::default();
        let ground = Ground::new(false, BOTTOM_GROUND_Y);
        let mut sink = RecordingSink::new();
        ground.draw(&mut sink, &viewport);

        let width = SpriteId::Ground.width();
        let count = sink.sprites.len();
        assert_eq!(count, (viewport.width / width) as usize + 1 + GROUND_WRAP_TILES as usize);

        // Rightmost tile still reaches the view edge at full slide
        let span = width * GROUND_WRAP_TILES;
        let last = &sink.sprites[count - 1];
        assert!(last.x - span + width >= viewport.left() + viewport.width);
    }

    #[test]
    fn test_ground_draws_flipped_ceiling() {
        let [top, bottom] = Ground::pair();
        let mut sink = RecordingSink::new();
        top.draw(&mut sink, &Viewport::default());
        assert!(sink.sprites.iter().all(|d| d.flip_y));
        sink.clear();
        bottom.draw(&mut sink, &Viewport::default());
        assert!(sink.sprites.iter().all(|d| !d.flip_y));
    }

    #[test]
    fn test_background_layers_parallax_speeds_increase() {
        let layers = Background::layers();
        assert!(layers[0].velocity.x < layers[1].velocity.x);
        assert!(layers[1].velocity.x < layers[2].velocity.x);
    }
}
