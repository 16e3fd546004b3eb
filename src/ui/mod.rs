//! Terminal front end: key bindings and frame rendering.

pub mod game_scene;
pub mod raster;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use flappberry::game::GameAction;

/// What a key press asks of the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Game(GameAction),
    Quit,
}

/// Map a key event to a command. Only presses count, so held keys and
/// release events never retrigger an action.
pub fn key_command(event: &KeyEvent) -> Option<KeyCommand> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(KeyCommand::Game(GameAction::Jump)),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(KeyCommand::Game(GameAction::Pause)),
        KeyCode::F(1) => Some(KeyCommand::Game(GameAction::DebugToggle)),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyCommand::Quit),
        _ => None,
    }
}
