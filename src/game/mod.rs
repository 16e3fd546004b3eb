//! Flappy game core.
//!
//! A real-time arcade loop where the player flaps through scrolling pipe
//! obstacles. Gravity pulls the player down every frame, and touching a
//! pipe or either ground strip ends the round.

pub mod collision;
pub mod input;
pub mod logic;
pub mod obstacles;
pub mod types;

pub use collision::{resolve_pipes, touches_ground, PipeOutcome};
pub use input::{FrameInput, GameAction};
pub use logic::Game;
pub use obstacles::{ObstacleGenerator, Spawn};
pub use types::{GameState, Phase};
