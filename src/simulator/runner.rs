//! Batch runner driving the real frame loop with the autopilot.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::game::{FrameInput, Game};
use crate::score::MemoryScoreStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Play every configured round and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_run(config, rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - score {}, spawns {}, frames {}{}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.spawns,
                stats.frames,
                if stats.crashed { "" } else { " (survived)" }
            );
        }
        runs.push(stats);

        if config.verbosity == 1 {
            let best = runs.iter().map(|r| r.score).max().unwrap_or(0);
            if let Some(line) = progress_line(run_idx + 1, config.num_runs, best) {
                println!("{}", line);
            }
        }
    }

    SimReport::from_runs(runs, config.max_frames)
}

/// Progress at every tenth of the batch and at the end.
fn progress_line(done: u32, total: u32, best: u32) -> Option<String> {
    let step = (total / 10).max(1);
    if done % step == 0 || done == total {
        Some(format!("  {:>5}/{} rounds, best score {}", done, total, best))
    } else {
        None
    }
}

/// One round from the title screen until the player crashes or the frame
/// limit is reached.
pub fn simulate_single_run(config: &SimConfig, rng: StdRng) -> RunStats {
    let store = MemoryScoreStore::default();
    let mut game = Game::new(config.game.clone(), Box::new(store), rng);
    let autopilot = Autopilot::default();

    // Leave the title screen
    game.frame(config.frame_ms, FrameInput::jump());

    let mut frames = 0;
    let mut jumps = 0;
    while frames < config.max_frames && !game.state.is_game_over() {
        let input = if autopilot.wants_jump(&game.player, &game.pipes) {
            jumps += 1;
            FrameInput::jump()
        } else {
            FrameInput::none()
        };
        game.frame(config.frame_ms, input);
        game.drain_sounds();
        frames += 1;
    }

    log::debug!(
        "simulated run: score {} after {} frames",
        game.state.score,
        frames
    );

    RunStats {
        score: game.state.score,
        spawns: game.state.spawns,
        frames,
        jumps,
        crashed: game.state.is_game_over(),
    }
}
