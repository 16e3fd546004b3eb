//! Per-frame input edges.

/// Abstract game actions, independent of key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Jump,
    Pause,
    DebugToggle,
}

/// "Just pressed" edges sampled once per frame.
///
/// Several presses of the same action within one frame collapse into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump: bool,
    pub pause: bool,
    pub debug: bool,
}

impl FrameInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::default()
        }
    }

    pub fn pause() -> Self {
        Self {
            pause: true,
            ..Self::default()
        }
    }

    pub fn debug() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }

    pub fn press(&mut self, action: GameAction) {
        match action {
            GameAction::Jump => self.jump = true,
            GameAction::Pause => self.pause = true,
            GameAction::DebugToggle => self.debug = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.jump || self.pause || self.debug)
    }
}
