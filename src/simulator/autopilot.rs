//! Flap-when-low controller.

use crate::constants::{BOTTOM_GROUND_Y, TOP_GROUND_Y};
use crate::entities::{Pipe, Player};
use crate::render::SpriteId;

/// Aims for the middle of the next opening and flaps whenever the player
/// sinks below it.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Flap when this far below the target.
    pub slack: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { slack: 4.0 }
    }
}

impl Autopilot {
    /// Vertical center of the opening at the next pipe column ahead of the
    /// player, or of the open sky when nothing is ahead.
    pub fn target_height(&self, player: &Player, pipes: &[Pipe]) -> f64 {
        let floor = BOTTOM_GROUND_Y + SpriteId::Ground.height();
        let ceiling = TOP_GROUND_Y;

        let next_x = pipes
            .iter()
            .filter(|pipe| pipe.right_edge() >= player.position.x)
            .map(|pipe| pipe.position.x)
            .fold(f64::INFINITY, f64::min);
        if !next_x.is_finite() {
            return (floor + ceiling) / 2.0;
        }

        let mut low = floor;
        let mut high = ceiling;
        for pipe in pipes.iter().filter(|pipe| pipe.position.x == next_x) {
            let rect = pipe.rect();
            if pipe.flip {
                high = high.min(rect.y);
            } else {
                low = low.max(rect.y2());
            }
        }
        (low + high) / 2.0
    }

    pub fn wants_jump(&self, player: &Player, pipes: &[Pipe]) -> bool {
        player.velocity.y <= 0.0 && player.position.y < self.target_height(player, pipes) - self.slack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_open_sky_targets_middle() {
        let player = Player::new(&GameConfig::default());
        let autopilot = Autopilot::default();
        let mid = (BOTTOM_GROUND_Y + SpriteId::Ground.height() + TOP_GROUND_Y) / 2.0;
        assert_eq!(autopilot.target_height(&player, &[]), mid);
    }

    #[test]
    fn test_targets_gap_of_double_pipe() {
        let player = Player::new(&GameConfig::default());
        let pipes = vec![Pipe::new(4, false, 30.0, -0.1), Pipe::new(8, true, 30.0, -0.1)];
        let expected = (pipes[0].rect().y2() + pipes[1].rect().y) / 2.0;
        assert_eq!(Autopilot::default().target_height(&player, &pipes), expected);
    }

    #[test]
    fn test_flaps_only_when_low_and_falling() {
        let mut player = Player::new(&GameConfig::default());
        let autopilot = Autopilot::default();
        player.position.y = -100.0;
        assert!(autopilot.wants_jump(&player, &[]));
        player.velocity.y = 0.3;
        assert!(!autopilot.wants_jump(&player, &[]));
        player.velocity.y = 0.0;
        player.position.y = 50.0;
        assert!(!autopilot.wants_jump(&player, &[]));
    }
}
