//! Integration test: Game flow end to end
//!
//! Drives `Game::frame` through title, play, game over and reset with a
//! seeded RNG and in-memory collaborators.

use flappberry::config::GameConfig;
use flappberry::entities::Pipe;
use flappberry::game::{FrameInput, Game, Phase};
use flappberry::constants::LOWER_WORLD_BOUND;
use flappberry::geometry::Vec2;
use flappberry::render::SpriteId;
use flappberry::score::{JsonScoreStore, MemoryScoreStore, ScoreStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

const FRAME_MS: f64 = 16.0;

/// Store whose contents stay inspectable after the game takes ownership.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<MemoryScoreStore>>);

impl ScoreStore for SharedStore {
    fn load_best(&self) -> u32 {
        self.0.borrow().load_best()
    }

    fn store_best(&mut self, best: u32) -> io::Result<()> {
        self.0.borrow_mut().store_best(best)
    }
}

/// Gravity off so the player hovers at the origin unless a test moves it.
fn floating_config() -> GameConfig {
    GameConfig {
        gravity: 0.0,
        ..GameConfig::default()
    }
}

fn new_game(config: GameConfig, store: impl ScoreStore + 'static) -> Game<ChaCha8Rng> {
    Game::new(config, Box::new(store), ChaCha8Rng::seed_from_u64(2024))
}

fn run_frames(game: &mut Game<ChaCha8Rng>, count: usize) {
    for _ in 0..count {
        game.frame(FRAME_MS, FrameInput::none());
    }
}

/// A scorable pipe already behind the player, followed by a tall ceiling
/// pipe covering the origin.
fn passed_then_blocking_pipes() -> Vec<Pipe> {
    vec![
        Pipe::new(3, false, -40.0, -0.1),
        Pipe::new(10, true, -2.0, -0.1),
    ]
}

/// Confetti specks in flight. Trail specks are always smaller than 1.0.
fn confetti_count(game: &Game<ChaCha8Rng>) -> usize {
    game.particles
        .system()
        .active()
        .filter(|p| p.sprite == SpriteId::ParticleSpeck && p.scale >= 1.0)
        .count()
}

/// Start a round and let the collision grace run out.
fn start_round(game: &mut Game<ChaCha8Rng>) {
    game.frame(FRAME_MS, FrameInput::jump());
    run_frames(game, 10);
    assert_eq!(game.player.grace_ms, 0.0);
}

// =============================================================================
// Title
// =============================================================================

#[test]
fn test_jump_on_title_starts_clean_round() {
    let mut game = new_game(GameConfig::default(), MemoryScoreStore::with_best(7));
    assert_eq!(game.state.phase, Phase::Title);
    assert_eq!(game.state.best, 7);

    game.frame(FRAME_MS, FrameInput::jump());

    assert_eq!(game.state.phase, Phase::Playing);
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.timer, 0.0);
    assert!(game.pipes.is_empty());
    assert_eq!(game.player.position, Vec2::ZERO);
}

// =============================================================================
// Obstacle timing
// =============================================================================

#[test]
fn test_two_seconds_of_play_spawns_one_obstacle() {
    let mut game = new_game(floating_config(), MemoryScoreStore::default());
    game.frame(FRAME_MS, FrameInput::jump());

    // 125 frames of 16 ms = 2000 ms
    run_frames(&mut game, 124);
    assert_eq!(game.state.spawns, 0);
    assert!(game.pipes.is_empty());

    run_frames(&mut game, 1);
    assert_eq!(game.state.phase, Phase::Playing);
    assert_eq!(game.state.spawns, 1);
    // A double spawn adds a hidden ceiling pipe
    let visible = game.pipes.iter().filter(|p| !p.hidden).count();
    assert_eq!(visible, 1);
    assert!(game.pipes.len() == 1 || game.pipes.len() == 2);
    assert_eq!(game.state.timer, 0.0);
}

#[test]
fn test_single_large_delta_spawns_once_and_keeps_residual() {
    let mut game = new_game(floating_config(), MemoryScoreStore::default());
    game.frame(FRAME_MS, FrameInput::jump());

    game.frame(2500.0, FrameInput::none());
    assert_eq!(game.state.spawns, 1);
    assert!((game.state.timer - 500.0).abs() < 1e-9);
}

// =============================================================================
// Collision, scoring and persistence
// =============================================================================

#[test]
fn test_pipe_hit_ends_round_and_persists_best_once() {
    let store = SharedStore::default();
    let mut game = new_game(floating_config(), store.clone());
    start_round(&mut game);

    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());

    assert_eq!(game.state.phase, Phase::GameOver);
    assert_eq!(game.state.score, 1);
    assert_eq!(game.state.best, 1);
    assert!(game.state.new_best);
    assert!(game.player.hitted);
    assert_eq!(store.0.borrow().best, 1);

    run_frames(&mut game, 60);
    assert_eq!(store.0.borrow().writes, 1);
}

#[test]
fn test_score_below_best_is_not_written() {
    let store = SharedStore(Rc::new(RefCell::new(MemoryScoreStore::with_best(50))));
    let mut game = new_game(floating_config(), store.clone());
    start_round(&mut game);

    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());

    assert_eq!(game.state.phase, Phase::GameOver);
    assert_eq!(game.state.best, 50);
    assert!(!game.state.new_best);
    assert_eq!(game.state.best_score_text(), "Best Score: 50");
    assert_eq!(store.0.borrow().writes, 0);
}

#[test]
fn test_best_score_reaches_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    let mut game = new_game(floating_config(), JsonScoreStore::at(path.clone()));
    start_round(&mut game);

    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());

    assert_eq!(game.state.phase, Phase::GameOver);
    assert_eq!(JsonScoreStore::at(path).load_best(), 1);
}

#[test]
fn test_game_over_freezes_scrolling_next_frame() {
    let mut game = new_game(floating_config(), MemoryScoreStore::default());
    start_round(&mut game);

    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());
    assert_eq!(game.state.phase, Phase::GameOver);

    let pipes: Vec<f64> = game.pipes.iter().map(|p| p.position.x).collect();
    let grounds: Vec<f64> = game.grounds.iter().map(|g| g.offset()).collect();
    let backgrounds: Vec<f64> = game.backgrounds.iter().map(|b| b.offset()).collect();
    let timer = game.state.timer;

    run_frames(&mut game, 5);

    assert_eq!(game.pipes.iter().map(|p| p.position.x).collect::<Vec<_>>(), pipes);
    assert_eq!(game.grounds.iter().map(|g| g.offset()).collect::<Vec<_>>(), grounds);
    assert_eq!(
        game.backgrounds.iter().map(|b| b.offset()).collect::<Vec<_>>(),
        backgrounds
    );
    assert_eq!(game.state.timer, timer);
    assert_eq!(game.state.score, 1);
}

#[test]
fn test_knocked_out_player_keeps_falling() {
    let mut game = new_game(GameConfig::default(), MemoryScoreStore::default());
    start_round(&mut game);
    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());
    assert_eq!(game.state.phase, Phase::GameOver);

    let before = game.player.position;
    run_frames(&mut game, 30);
    assert_ne!(game.player.position, before);
}

#[test]
fn test_player_freezes_below_lower_bound() {
    let mut game = new_game(GameConfig::default(), MemoryScoreStore::default());
    start_round(&mut game);
    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());
    assert_eq!(game.state.phase, Phase::GameOver);

    for _ in 0..600 {
        if game.player.position.y <= LOWER_WORLD_BOUND {
            break;
        }
        game.frame(FRAME_MS, FrameInput::none());
    }
    assert!(game.player.position.y <= LOWER_WORLD_BOUND);

    let resting = game.player.position;
    run_frames(&mut game, 30);
    assert_eq!(game.player.position, resting);
}

#[test]
fn test_long_frame_past_ground_ends_round() {
    let mut game = new_game(GameConfig::default(), MemoryScoreStore::default());
    start_round(&mut game);

    // One stalled frame drops the player through the whole ground strip
    game.frame(1500.0, FrameInput::none());
    assert!(game.player.position.y < LOWER_WORLD_BOUND);

    game.frame(FRAME_MS, FrameInput::none());
    assert_eq!(game.state.phase, Phase::GameOver);
    assert!(game.player.hitted);

    let timer = game.state.timer;
    run_frames(&mut game, 20);
    assert_eq!(game.state.timer, timer);
}

// =============================================================================
// Confetti shower
// =============================================================================

#[test]
fn test_new_best_showers_confetti_on_game_over() {
    let mut game = new_game(floating_config(), MemoryScoreStore::default());
    start_round(&mut game);
    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());
    assert!(game.state.new_best);
    assert!(confetti_count(&game) > 0);

    // The burst from the hit lives under a second
    run_frames(&mut game, 70);
    let mut showered = false;
    for _ in 0..200 {
        game.frame(FRAME_MS, FrameInput::none());
        showered |= confetti_count(&game) > 0;
    }
    assert_eq!(game.state.phase, Phase::GameOver);
    assert!(showered);
}

#[test]
fn test_no_confetti_without_new_best() {
    let mut game = new_game(floating_config(), MemoryScoreStore::with_best(5));
    start_round(&mut game);
    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());
    assert_eq!(game.state.phase, Phase::GameOver);
    assert!(!game.state.new_best);

    for _ in 0..300 {
        assert_eq!(confetti_count(&game), 0);
        game.frame(FRAME_MS, FrameInput::none());
    }
    assert_eq!(confetti_count(&game), 0);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_waits_for_delay() {
    let mut game = new_game(floating_config(), MemoryScoreStore::default());
    start_round(&mut game);
    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());
    assert_eq!(game.state.phase, Phase::GameOver);

    // 30 frames = 480 ms, still inside the delay
    run_frames(&mut game, 30);
    assert!(!game.can_restart());
    game.frame(FRAME_MS, FrameInput::jump());
    assert_eq!(game.state.phase, Phase::GameOver);

    run_frames(&mut game, 2);
    assert!(game.can_restart());
    game.frame(FRAME_MS, FrameInput::jump());

    assert_eq!(game.state.phase, Phase::Playing);
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.timer, 0.0);
    assert!(game.pipes.is_empty());
    assert_eq!(game.player.position, Vec2::ZERO);
    assert!(!game.player.hitted);
    assert!(!game.state.new_best);
}

#[test]
fn test_grace_after_reset_ignores_overlap() {
    let mut game = new_game(floating_config(), MemoryScoreStore::default());
    start_round(&mut game);
    game.pipes = passed_then_blocking_pipes();
    game.frame(FRAME_MS, FrameInput::none());
    run_frames(&mut game, 40);
    game.frame(FRAME_MS, FrameInput::jump());
    assert_eq!(game.state.phase, Phase::Playing);

    // Overlapping pipe right after reset is ignored until grace runs out
    let blocking = Pipe::new(10, true, -2.0, -0.1);
    assert!(!game.player.collides(&blocking.rect()));
    game.pipes = vec![blocking];
    game.frame(FRAME_MS, FrameInput::none());
    assert_eq!(game.state.phase, Phase::Playing);

    run_frames(&mut game, 10);
    assert_eq!(game.state.phase, Phase::GameOver);
}

// =============================================================================
// Pause and debug
// =============================================================================

#[test]
fn test_pause_round_trip_keeps_state() {
    let mut game = new_game(GameConfig::default(), MemoryScoreStore::default());
    game.frame(FRAME_MS, FrameInput::jump());
    run_frames(&mut game, 5);

    game.frame(FRAME_MS, FrameInput::pause());
    assert_eq!(game.state.phase, Phase::Paused);
    let position = game.player.position;
    let timer = game.state.timer;

    run_frames(&mut game, 100);
    assert_eq!(game.player.position, position);
    assert_eq!(game.state.timer, timer);

    game.frame(FRAME_MS, FrameInput::pause());
    assert_eq!(game.state.phase, Phase::Playing);
    assert!(game.state.timer > timer);
}

#[test]
fn test_debug_toggles_in_every_phase() {
    let mut game = new_game(floating_config(), MemoryScoreStore::default());
    game.frame(FRAME_MS, FrameInput::debug());
    assert!(game.state.debug);

    game.frame(FRAME_MS, FrameInput::jump());
    game.frame(FRAME_MS, FrameInput::pause());
    game.frame(FRAME_MS, FrameInput::debug());
    assert!(!game.state.debug);
    assert_eq!(game.state.phase, Phase::Paused);
}
