//! Software rasterizer from recorded sprite draws to half-block cells.
//!
//! Each terminal cell holds two vertically stacked pixels, drawn as `▀`
//! with the top pixel as foreground and the bottom pixel as background.

use flappberry::geometry::Rect as WorldRect;
use flappberry::render::{RecordingSink, SpriteDraw, SpriteId, Viewport};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const SKY: Color = Color::Rgb(112, 197, 206);
const DEBUG: Color = Color::Rgb(230, 40, 40);

/// Flat color standing in for each sprite's art.
pub fn sprite_color(draw: &SpriteDraw) -> Color {
    match draw.sprite {
        SpriteId::Player => Color::Rgb(250, 210, 60),
        SpriteId::PipeBody => Color::Rgb(96, 176, 56),
        SpriteId::PipeHead => Color::Rgb(60, 130, 40),
        SpriteId::Ground => Color::Rgb(222, 216, 149),
        SpriteId::Background(0) => Color::Rgb(200, 230, 235),
        SpriteId::Background(1) => Color::Rgb(150, 210, 160),
        SpriteId::Background(_) => Color::Rgb(110, 180, 110),
        SpriteId::ParticlePuff | SpriteId::ParticleSpeck => {
            let (r, g, b) = draw.color.to_rgb8();
            Color::Rgb(r, g, b)
        }
    }
}

/// Pixel grid covering the camera's view of the world.
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    bounds: (f64, f64, f64, f64),
}

impl Raster {
    /// `cols` x `rows` cells, i.e. `cols` x `2 * rows` pixels.
    pub fn new(cols: u16, rows: u16, viewport: &Viewport) -> Self {
        let width = cols as usize;
        let height = rows as usize * 2;
        Self {
            width,
            height,
            pixels: vec![SKY; width * height],
            bounds: viewport.camera_bounds(),
        }
    }

    #[cfg(test)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[cfg(test)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// World x to fractional pixel column.
    fn column(&self, x: f64) -> f64 {
        let (x_min, x_max, _, _) = self.bounds;
        (x - x_min) / (x_max - x_min) * self.width as f64
    }

    /// World y to fractional pixel row, counted from the top.
    fn row(&self, y: f64) -> f64 {
        let (_, _, y_min, y_max) = self.bounds;
        (y_max - y) / (y_max - y_min) * self.height as f64
    }

    /// Pixel span covered by a world rectangle, clamped to the grid.
    fn span(&self, rect: &WorldRect) -> Option<(usize, usize, usize, usize)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let left = self.column(rect.x).floor().max(0.0);
        let right = self.column(rect.x2()).ceil().min(self.width as f64);
        let top = self.row(rect.y2()).floor().max(0.0);
        let bottom = self.row(rect.y).ceil().min(self.height as f64);
        if left >= right || top >= bottom {
            return None;
        }
        Some((left as usize, right as usize, top as usize, bottom as usize))
    }

    pub fn fill(&mut self, rect: &WorldRect, color: Color) {
        if let Some((x0, x1, y0, y1)) = self.span(rect) {
            for y in y0..y1 {
                let row = y * self.width;
                self.pixels[row + x0..row + x1].fill(color);
            }
        }
    }

    pub fn outline(&mut self, rect: &WorldRect, color: Color) {
        if let Some((x0, x1, y0, y1)) = self.span(rect) {
            for x in x0..x1 {
                self.pixels[y0 * self.width + x] = color;
                self.pixels[(y1 - 1) * self.width + x] = color;
            }
            for y in y0..y1 {
                self.pixels[y * self.width + x0] = color;
                self.pixels[y * self.width + x1 - 1] = color;
            }
        }
    }

    /// Paint a recorded frame in submission order.
    pub fn paint(&mut self, sink: &RecordingSink) {
        for draw in &sink.sprites {
            self.fill(&draw.bounds(), sprite_color(draw));
        }
        for rect in &sink.debug_rects {
            self.outline(rect, DEBUG);
        }
    }

    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height / 2);
        for cell_row in 0..self.height / 2 {
            let top = cell_row * 2 * self.width;
            let bottom = top + self.width;
            let spans: Vec<Span> = (0..self.width)
                .map(|x| {
                    Span::styled(
                        "▀",
                        Style::default()
                            .fg(self.pixels[top + x])
                            .bg(self.pixels[bottom + x]),
                    )
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines
    }
}
