//! Collision and scoring checks.
//!
//! Pure queries over the entities; the frame loop turns their results into
//! state transitions, sounds, and effects.

use crate::entities::{Ground, Pipe, Player};

/// Result of checking the player against every pipe in list order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeOutcome {
    /// The player overlapped a pipe.
    pub hit: bool,
    /// Pipes newly passed and collected this frame.
    pub scored: u32,
}

/// Walk the pipes in order: the first overlap is a hit, and pipes passed
/// before the hit are collected. Nothing scores once the player is
/// knocked out, in this frame or any later one.
pub fn resolve_pipes(player: &Player, pipes: &mut [Pipe]) -> PipeOutcome {
    let mut outcome = PipeOutcome::default();

    for pipe in pipes.iter_mut() {
        if !outcome.hit && player.collides(&pipe.rect()) {
            outcome.hit = true;
        }

        let knocked_out = player.hitted || outcome.hit;
        if !knocked_out && is_passed(player, pipe) {
            pipe.collected = true;
            outcome.scored += 1;
        }
    }

    outcome
}

/// Scorable pipe whose right edge is behind the player.
fn is_passed(player: &Player, pipe: &Pipe) -> bool {
    !pipe.hidden && !pipe.collected && pipe.right_edge() < player.position.x
}

/// The player touches the floor or ceiling strip.
pub fn touches_ground(player: &Player, grounds: &[Ground]) -> bool {
    grounds.iter().any(|ground| player.collides(&ground.rect()))
}
