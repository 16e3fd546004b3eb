//! Headless autopilot simulator for tuning analysis.
//!
//! Plays many seeded rounds with a simple flap-when-low autopilot through the
//! real [`Game`](crate::game::Game) frame loop, so reported scores and spawn
//! counts reflect actual gameplay behavior.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
