//! Terminal presentation of a game frame: play area, banners, and status bar.

use super::raster::Raster;
use flappberry::game::{GameState, Phase};
use flappberry::render::{RecordingSink, Viewport};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// World units of banner bob per terminal row.
const BOB_UNITS_PER_ROW: f64 = 5.0;

/// Everything the HUD shows besides the scene itself.
pub struct Hud<'a> {
    pub state: &'a GameState,
    pub pipes: usize,
    pub particles: usize,
    /// The game-over screen accepts a restart.
    pub can_retry: bool,
}

/// Outer border plus a two-line status bar under the play area.
fn split(area: Rect) -> (Block<'static>, Rect, Rect) {
    let block = Block::default()
        .title(" Flappberry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);
    (block, chunks[0], chunks[1])
}

/// Play area inside a full-terminal `area`; the host sizes the viewport from it.
pub fn play_area(area: Rect) -> Rect {
    split(area).1
}

/// Viewport matching a play area of half-block cells.
pub fn viewport_for(play: Rect) -> Viewport {
    Viewport::extend(play.width as f64, play.height as f64 * 2.0)
}

pub fn render_game(frame: &mut Frame, area: Rect, scene: &RecordingSink, viewport: &Viewport, hud: &Hud) {
    frame.render_widget(Clear, area);
    let (block, play, status) = split(area);
    frame.render_widget(block, area);

    let mut raster = Raster::new(play.width, play.height, viewport);
    raster.paint(scene);
    frame.render_widget(Paragraph::new(raster.to_lines()), play);

    render_banner(frame, play, hud);
    if hud.state.debug {
        render_debug_overlay(frame, play, hud);
    }
    render_status(frame, status, hud.state);
}

fn render_banner(frame: &mut Frame, area: Rect, hud: &Hud) {
    let state = hud.state;
    let title = |text: &str, color: Color| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    };

    let lines = match state.phase {
        Phase::Title => vec![
            title("FLAPPBERRY", Color::Yellow),
            Line::from(""),
            Line::from(Span::styled(
                format!("Best Score: {}", state.best),
                Style::default().fg(Color::White),
            )),
        ],
        Phase::Playing => vec![title(&state.score.to_string(), Color::White)],
        Phase::Paused => vec![
            title(&state.score.to_string(), Color::White),
            Line::from(""),
            title("Paused", Color::Cyan),
        ],
        Phase::GameOver => {
            let mut lines = vec![
                title("Game Over", Color::Red),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Score: {}", state.score),
                    Style::default().fg(Color::White),
                )),
                Line::from(Span::styled(
                    state.best_score_text(),
                    Style::default().fg(if state.new_best {
                        Color::Yellow
                    } else {
                        Color::White
                    }),
                )),
            ];
            if hud.can_retry {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "[Space] Retry",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
    };

    let height = lines.len() as u16;
    if area.height < height {
        return;
    }

    // Title and game-over banners bob; the live score stays put.
    let bob = match state.phase {
        Phase::Title | Phase::GameOver => (state.banner_bob() / BOB_UNITS_PER_ROW).round() as i32,
        Phase::Playing | Phase::Paused => 0,
    };
    let base = match state.phase {
        Phase::Playing => 1,
        _ => area.height.saturating_sub(height) / 3,
    };
    let y = (base as i32 - bob).clamp(0, (area.height - height) as i32) as u16;

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect {
            y: area.y + y,
            height,
            ..area
        },
    );
}

fn render_debug_overlay(frame: &mut Frame, area: Rect, hud: &Hud) {
    let state = hud.state;
    let text = format!(
        "pipes {}  particles {}  spawns {}  timer {:.0}ms",
        hud.pipes, hud.particles, state.spawns, state.timer
    );
    let line = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Red).bg(Color::Black),
    )));
    frame.render_widget(line, Rect { height: 1, ..area });
}

/// Status message plus the key legend.
fn render_status(frame: &mut Frame, area: Rect, state: &GameState) {
    if area.height < 1 {
        return;
    }

    let (message, color) = match state.phase {
        Phase::Title => ("Press Space to start!", Color::Yellow),
        Phase::Playing => ("Flap through the gaps", Color::Green),
        Phase::Paused => ("Paused", Color::Cyan),
        Phase::GameOver => ("Game over", Color::Red),
    };
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 {
        return;
    }
    let controls = [
        ("[Space/Up]", "Flap"),
        ("[P]", "Pause"),
        ("[F1]", "Debug"),
        ("[Esc/Q]", "Quit"),
    ];
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}
