//! Game state and core simulation types
//!
//! Everything the engine mutates lives here: the paddle, ball, brick grid,
//! cosmetic entities, and the session-level bookkeeping (score, lives,
//! level, phase). The state is an explicit object owned by the frame loop;
//! there are no process-wide singletons.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::level::Layout;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title/menu overlay shown, simulation idle
    Menu,
    /// Active gameplay (the ball may still be held pre-serve)
    Playing,
    /// Gameplay suspended
    Paused,
    /// Session ended; `GameState::outcome` says how
    SessionOver,
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// All lives spent
    Defeat,
    /// Every level cleared
    Victory,
}

/// Discrete events emitted by the engine for presentation/audio sinks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce,
    /// A brick was destroyed; carries its color index and center position
    /// so the sink can spawn matching effects
    BrickBreak { color: u8, x: f32, y: f32 },
    LifeLost,
    LevelCleared { level: u32 },
    SessionWon { score: u32 },
    SessionLost { score: u32 },
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
    /// Keyboard-driven horizontal velocity, pixels per second
    pub velocity_x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        let mut paddle = Self {
            rect: Rect::new(0.0, FIELD_HEIGHT - PADDLE_Y_OFFSET, PADDLE_WIDTH, PADDLE_HEIGHT),
            velocity_x: 0.0,
        };
        paddle.recenter();
        paddle
    }
}

impl Paddle {
    /// Center the paddle horizontally in the field
    pub fn recenter(&mut self) {
        self.rect.x = (FIELD_WIDTH - self.rect.w) / 2.0;
    }

    /// Recenter the paddle on a pointer x position
    pub fn center_on(&mut self, x: f32) {
        self.rect.x = x - self.rect.w / 2.0;
        self.clamp_to_field();
    }

    /// Advance by the current velocity and clamp to the field
    pub fn integrate(&mut self, dt: f32) {
        self.rect.x += self.velocity_x * dt;
        self.clamp_to_field();
    }

    /// Keep the paddle inside `[0, FIELD_WIDTH - w]`
    pub fn clamp_to_field(&mut self) {
        self.rect.x = self.rect.x.clamp(0.0, FIELD_WIDTH - self.rect.w);
    }

    /// Widen the paddle (collectible reward), capped at half the field
    pub fn widen(&mut self) {
        self.rect.w = (self.rect.w + PADDLE_WIDEN_AMOUNT).min(PADDLE_MAX_WIDTH);
        self.clamp_to_field();
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    /// Unit travel direction; ignored while held
    pub dir: Vec2,
    /// Scalar speed, pixels per second; non-decreasing within a life
    pub speed: f32,
    /// Held balls track the paddle and wait for a serve
    pub held: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, BALL_SIZE, BALL_SIZE),
            dir: Vec2::new(0.0, -1.0),
            speed: BALL_START_SPEED,
            held: true,
        }
    }
}

impl Ball {
    /// Return to the held state: speed reset, direction straight up
    pub fn rearm(&mut self) {
        self.held = true;
        self.speed = BALL_START_SPEED;
        self.dir = Vec2::new(0.0, -1.0);
    }

    /// Track the paddle while held (centered, resting just above)
    pub fn snap_to_paddle(&mut self, paddle: &Paddle) {
        self.rect.x = paddle.rect.x + (paddle.rect.w - self.rect.w) / 2.0;
        self.rect.y = paddle.rect.y - self.rect.h - 2.0;
    }

    /// Release the ball at `angle` radians from vertical (positive = right)
    pub fn serve(&mut self, angle: f32) {
        self.dir = Vec2::new(angle.sin(), -angle.cos().abs()).normalize();
        self.held = false;
    }
}

/// A single brick cell
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    pub alive: bool,
    /// Palette index in `0..BRICK_COLORS`
    pub color: u8,
    /// Drops a collectible when destroyed
    pub special: bool,
}

impl Brick {
    /// Field-space rectangle of the grid cell at (row, col)
    pub fn rect_at(row: usize, col: usize) -> Rect {
        Rect::new(
            col as f32 * BRICK_WIDTH + BRICK_PADDING / 2.0,
            BRICK_TOP_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_PADDING),
            BRICK_WIDTH - BRICK_PADDING,
            BRICK_HEIGHT - BRICK_PADDING,
        )
    }
}

/// A cosmetic spark spawned when a brick shatters
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub max_age: f32,
    pub color: u8,
}

/// A falling power-up dropped by a special brick; widens the paddle on catch
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub rect: Rect,
    pub vel: Vec2,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub score: u32,
    pub lives: u8,
    /// Current level, 1-based
    pub level: u32,
    /// Count of bricks with `alive == true`
    pub bricks_remaining: u32,
    pub phase: GamePhase,
    /// Set when `phase == SessionOver`
    pub outcome: Option<SessionOutcome>,
    /// Escape from the menu requests process exit; owned by the frame loop
    pub quit: bool,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major `BRICK_ROWS x BRICK_COLS` grid, repopulated each level
    pub bricks: Vec<Brick>,
    pub collectibles: Vec<Collectible>,
    /// Visual sparks; never gameplay-affecting
    pub particles: Vec<Particle>,
    /// Events pending delivery to presentation/audio sinks
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session showing the menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            bricks_remaining: 0,
            phase: GamePhase::Menu,
            outcome: None,
            quit: false,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: Vec::new(),
            collectibles: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Row-major index into the brick grid
    #[inline]
    pub fn brick_index(row: usize, col: usize) -> usize {
        row * BRICK_COLS + col
    }

    /// Reset session-level counters for a brand-new run
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.outcome = None;
        self.collectibles.clear();
        self.particles.clear();
    }

    /// Populate the brick grid from a layout and re-arm for the level
    pub fn load_level(&mut self, layout: &Layout) {
        self.bricks.clear();
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let cell = layout.cell(row, col);
                self.bricks.push(Brick {
                    rect: Brick::rect_at(row, col),
                    alive: cell.alive,
                    color: cell.color,
                    special: cell.special,
                });
            }
        }
        self.bricks_remaining = layout.live_count();
        debug_assert_eq!(
            self.bricks_remaining as usize,
            self.bricks.iter().filter(|b| b.alive).count()
        );
        self.collectibles.clear();
        self.paddle.recenter();
        self.ball.rearm();
        self.ball.snap_to_paddle(&self.paddle);
    }

    /// Re-arm after a life loss: bricks untouched, ball held, paddle centered
    pub fn rearm_after_life_loss(&mut self) {
        self.paddle.recenter();
        self.ball.rearm();
        self.ball.snap_to_paddle(&self.paddle);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Burst of sparks at a destroyed brick's center
    pub fn spawn_brick_particles(&mut self, center: Vec2, color: u8) {
        for _ in 0..PARTICLES_PER_BRICK {
            while self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.random_range(60.0..180.0);
            let max_age = self.rng.random_range(0.5..1.0);
            self.particles.push(Particle {
                pos: center,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                age: 0.0,
                max_age,
                color,
            });
        }
    }

    /// Drop a collectible at a destroyed special brick's center
    pub fn spawn_collectible(&mut self, center: Vec2) {
        if self.collectibles.len() >= MAX_COLLECTIBLES {
            return;
        }
        self.collectibles.push(Collectible {
            rect: Rect::new(
                center.x - COLLECTIBLE_SIZE / 2.0,
                center.y - COLLECTIBLE_SIZE / 2.0,
                COLLECTIBLE_SIZE,
                COLLECTIBLE_SIZE,
            ),
            vel: Vec2::new(0.0, COLLECTIBLE_FALL_SPEED),
        });
    }
}

/// The menu's "PLAY" hit-test region, in field space.
///
/// Pure geometry so the frontend can translate pointer clicks into the
/// primary action without the engine knowing about pointers.
pub fn menu_play_rect() -> Rect {
    let w = 220.0;
    let h = 72.0;
    Rect::new((FIELD_WIDTH - w) / 2.0, 260.0, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{LevelProvider, ProceduralLevels};

    #[test]
    fn test_new_session_invariants() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.level, 1);
        assert!(state.ball.held);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_load_level_populates_grid() {
        let mut state = GameState::new(7);
        let layout = ProceduralLevels.layout_for(1);
        state.load_level(&layout);
        assert_eq!(state.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(state.bricks_remaining, layout.live_count());
        assert!(state.ball.held);
        // Paddle centered
        assert!((state.paddle.rect.center_x() - FIELD_WIDTH / 2.0).abs() < 0.001);
    }

    #[test]
    fn test_rearm_preserves_bricks() {
        let mut state = GameState::new(7);
        state.load_level(&ProceduralLevels.layout_for(1));
        let before = state.bricks.clone();
        state.ball.serve(0.0);
        state.ball.speed *= 2.0;
        state.rearm_after_life_loss();
        assert!(state.ball.held);
        assert_eq!(state.ball.speed, BALL_START_SPEED);
        assert_eq!(state.bricks, before);
    }

    #[test]
    fn test_held_ball_tracks_paddle() {
        let mut state = GameState::new(7);
        state.paddle.center_on(300.0);
        state.ball.snap_to_paddle(&state.paddle);
        assert!((state.ball.rect.center_x() - state.paddle.rect.center_x()).abs() < 0.001);
        assert!(state.ball.rect.bottom() <= state.paddle.rect.y);
    }

    #[test]
    fn test_serve_direction_is_unit_and_upward() {
        let mut ball = Ball::default();
        ball.serve(0.5);
        assert!(!ball.held);
        assert!((ball.dir.length() - 1.0).abs() < 0.001);
        assert!(ball.dir.y < 0.0);
    }

    #[test]
    fn test_paddle_widen_caps() {
        let mut paddle = Paddle::default();
        for _ in 0..50 {
            paddle.widen();
        }
        assert!(paddle.rect.w <= PADDLE_MAX_WIDTH);
    }

    #[test]
    fn test_menu_play_rect_centered() {
        let r = menu_play_rect();
        assert!((r.center_x() - FIELD_WIDTH / 2.0).abs() < 0.001);
        assert!(r.contains_point(FIELD_WIDTH / 2.0, 280.0));
    }
}
