//! Star Breaker - a classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `highscores`: Best-ever score and leaderboard persistence
//! - `settings`: Player preferences
//! - `audio`: Sound-effect taxonomy for presentation/audio sinks

pub mod audio;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Hard cap on a single step's `dt` so frame hitches cannot tunnel the ball
    pub const DT_MAX: f32 = 0.05;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 140.0;
    pub const PADDLE_HEIGHT: f32 = 18.0;
    /// Distance from the field's bottom edge to the paddle's top edge
    pub const PADDLE_Y_OFFSET: f32 = 64.0;
    /// Keyboard-driven paddle speed, pixels per second
    pub const PADDLE_SPEED: f32 = 800.0;
    /// Width gained per collectible caught
    pub const PADDLE_WIDEN_AMOUNT: f32 = 40.0;
    pub const PADDLE_MAX_WIDTH: f32 = FIELD_WIDTH / 2.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_START_SPEED: f32 = 420.0;
    /// Maximum deflection from vertical on a paddle bounce, in degrees
    pub const PADDLE_BOUNCE_MAX_DEG: f32 = 75.0;
    /// Maximum serve deflection from vertical, in degrees
    pub const SERVE_MAX_DEG: f32 = 60.0;
    /// Multiplicative speed growth on paddle hits (1.0 = disabled)
    pub const PADDLE_HIT_SPEED_GROWTH: f32 = 1.0;
    /// Multiplicative speed growth on brick hits
    pub const BRICK_HIT_SPEED_GROWTH: f32 = 1.015;

    /// Brick grid
    pub const BRICK_ROWS: usize = 7;
    pub const BRICK_COLS: usize = 12;
    pub const BRICK_WIDTH: f32 = FIELD_WIDTH / BRICK_COLS as f32;
    pub const BRICK_HEIGHT: f32 = 28.0;
    pub const BRICK_PADDING: f32 = 4.0;
    /// Top edge of the brick grid
    pub const BRICK_TOP_OFFSET: f32 = 80.0;
    /// Number of palette entries brick color indices select from
    pub const BRICK_COLORS: u8 = 10;
    /// Score for one brick at level 1; scales linearly with level
    pub const BRICK_SCORE: u32 = 10;

    /// Progression
    pub const MAX_LEVELS: u32 = 10;
    pub const STARTING_LIVES: u8 = 3;

    /// Cosmetics
    pub const MAX_PARTICLES: usize = 512;
    pub const PARTICLES_PER_BRICK: usize = 18;
    /// Downward pull on spark particles, pixels per second squared
    pub const PARTICLE_GRAVITY: f32 = 200.0;
    pub const MAX_COLLECTIBLES: usize = 8;
    pub const COLLECTIBLE_SIZE: f32 = 20.0;
    pub const COLLECTIBLE_FALL_SPEED: f32 = 60.0;
}
