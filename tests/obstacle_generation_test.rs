//! Integration test: Obstacle generation
//!
//! Statistical and invariant checks over many seeded spawns.

use flappberry::config::GameConfig;
use flappberry::entities::Pipe;
use flappberry::game::{ObstacleGenerator, Spawn};
use flappberry::render::Viewport;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn generator() -> ObstacleGenerator {
    ObstacleGenerator::new(&GameConfig::default())
}

#[test]
fn test_double_pipe_invariant_over_many_seeds() {
    let viewport = Viewport::default();
    let mut doubles = 0;

    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..10 {
            let mut pipes = Vec::new();
            if let Spawn::Double { bottom, top } = generator().spawn(&mut pipes, &viewport, &mut rng) {
                doubles += 1;
                assert!((3..=7).contains(&bottom));
                // top = 8 - (bottom - r) for r in {3, 4}
                let r = top as i64 - 8 + bottom as i64;
                assert!(r == 3 || r == 4, "bottom {} top {}", bottom, top);

                assert_eq!(pipes.len(), 2);
                assert_eq!(pipes.iter().filter(|p| p.hidden).count(), 1);
                assert_eq!(pipes[0].position.x, pipes[1].position.x);
                assert_eq!(pipes[0].velocity, pipes[1].velocity);

                let floor = pipes.iter().find(|p| !p.hidden).unwrap();
                let ceiling = pipes.iter().find(|p| p.hidden).unwrap();
                assert!(!floor.flip && ceiling.flip);
                // The two halves never close the gap
                assert!(floor.rect().y2() < ceiling.rect().y);
            }
        }
    }

    // Roughly half of 2000 spawns are doubles
    assert!((800..=1200).contains(&doubles), "doubles: {}", doubles);
}

#[test]
fn test_every_segment_count_appears() {
    let viewport = Viewport::default();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut singles = [false; 11];
    let mut bottoms = [false; 8];

    for _ in 0..2000 {
        let mut pipes = Vec::new();
        match generator().spawn(&mut pipes, &viewport, &mut rng) {
            Spawn::Single { size, .. } => singles[size as usize] = true,
            Spawn::Double { bottom, .. } => bottoms[bottom as usize] = true,
        }
    }

    assert!(singles[7..=10].iter().all(|&seen| seen));
    assert!(bottoms[3..=7].iter().all(|&seen| seen));
}

#[test]
fn test_pipes_are_anchored_to_floor_or_ceiling() {
    let viewport = Viewport::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..500 {
        let mut pipes = Vec::new();
        generator().spawn(&mut pipes, &viewport, &mut rng);
        for pipe in &pipes {
            let rect = pipe.rect();
            if pipe.flip {
                assert!((rect.y2() - 220.0).abs() < 1e-9);
            } else {
                assert!((rect.y + 220.0).abs() < 1e-9);
            }
            assert!((pipe.position.x - (viewport.width + Pipe::width())).abs() < 1e-9);
        }
    }
}

#[test]
fn test_timer_residual_accumulates_across_spawns() {
    let viewport = Viewport::default();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut pipes = Vec::new();
    let mut timer = 0.0;
    let mut spawns = 0;

    // 7 frames of 700 ms = 4900 ms: spawns at 2100 and 4200
    for _ in 0..7 {
        if generator()
            .tick(&mut timer, 700.0, &mut pipes, &viewport, &mut rng)
            .is_some()
        {
            spawns += 1;
        }
    }

    assert_eq!(spawns, 2);
    assert!((timer - 900.0).abs() < 1e-9);
}
