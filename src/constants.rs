// World geometry. The camera looks at the origin; y grows upward.
pub const VIRTUAL_WIDTH: f64 = 120.0;
pub const VIRTUAL_HEIGHT: f64 = 420.0;
pub const CAMERA_ZOOM: f64 = 1.2;

/// The player stops integrating once it falls below this height.
pub const LOWER_WORLD_BOUND: f64 = -VIRTUAL_HEIGHT / 2.0;

// Per-frame tuning values are expressed against a 60 FPS reference frame
// and scaled by the real frame delta.
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

// Player
pub const PLAYER_HITBOX_WIDTH: f64 = 16.0;
pub const PLAYER_HITBOX_HEIGHT: f64 = 16.0;

// Pipes
pub const PIPE_ANCHOR_Y: f64 = 220.0;
pub const PIPE_WIDTH_DIVISOR: f64 = 1.8;
pub const PIPE_HEAD_ORIGIN_FACTOR: f64 = 0.4;
/// Pipes are dropped once `x + width * PIPE_REMOVAL_MARGIN` leaves the left edge.
pub const PIPE_REMOVAL_MARGIN: f64 = 3.0;
pub const SINGLE_PIPE_SIZE_MIN: u32 = 7;
pub const SINGLE_PIPE_SIZE_MAX: u32 = 10;
pub const DOUBLE_PIPE_BOTTOM_MIN: u32 = 3;
pub const DOUBLE_PIPE_BOTTOM_MAX: u32 = 7;
pub const DOUBLE_PIPE_SPAN: u32 = 8;
pub const DOUBLE_PIPE_GAP_MIN: u32 = 3;
pub const DOUBLE_PIPE_GAP_MAX: u32 = 4;

// Scenery
pub const TOP_GROUND_Y: f64 = 200.0;
pub const BOTTOM_GROUND_Y: f64 = -260.0;
pub const GROUND_SCROLL_SPEED: f64 = 0.1;
pub const GROUND_WRAP_TILES: f64 = 3.0;
pub const BACKGROUND_WRAP_TILES: f64 = 1.0;
/// Horizontal overlap between neighbouring scenery tiles, hides seams.
pub const TILE_SEAM: f64 = 0.1;
/// (vertical divisor of the virtual height, scroll speed) from far to near.
pub const BACKGROUND_LAYERS: [(f64, f64); 3] = [(2.0, 0.025), (1.5, 0.05), (1.3, 0.1)];

// Particles
pub const PARTICLE_DEFAULT_LIFE_MS: f64 = 1000.0;
pub const GAME_OVER_CONFETTI_CHANCE: f64 = 0.08;

// HUD banner bob
pub const BANNER_CLOCK_RATE: f64 = 0.01;
pub const BANNER_BOB_AMPLITUDE: f64 = 5.0;

// Persistence
pub const BEST_SCORE_FILE: &str = "best.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappberry.log";
