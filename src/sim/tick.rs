//! Per-step simulation engine
//!
//! `tick` advances the session by one bounded timestep: input transitions
//! run first, then paddle intent, then (while playing) ball motion,
//! wall/paddle/brick resolution, life and level bookkeeping, and finally the
//! cosmetic subsystems. Deterministic for a given seed and input sequence.

use glam::Vec2;
use rand::Rng;

use super::collision::{Axis, min_penetration_axis, overlaps};
use super::level::LevelProvider;
use super::rect::Rect;
use super::state::{Brick, GameEvent, GamePhase, GameState, SessionOutcome};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer-driven paddle target x (field space)
    pub target_x: Option<f32>,
    /// Keyboard axis in [-1, 1], scaled by `PADDLE_SPEED`
    pub axis: f32,
    /// Context-sensitive primary action (start / serve / pause toggle)
    pub primary: bool,
    /// Full game reset
    pub restart: bool,
    /// Soft return to the menu; quit request when already there
    pub escape: bool,
    /// Demo mode: the paddle tracks the ball and serves automatically
    pub autopilot: bool,
}

/// What the primary key does, resolved from (phase, ball held)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrimaryAction {
    StartPlay,
    RestartAndPlay,
    ServeBall,
    Pause,
    Resume,
}

/// The single transition table behind the context-sensitive primary key
fn primary_action(phase: GamePhase, ball_held: bool) -> PrimaryAction {
    match (phase, ball_held) {
        (GamePhase::Menu, _) => PrimaryAction::StartPlay,
        (GamePhase::SessionOver, _) => PrimaryAction::RestartAndPlay,
        (GamePhase::Playing, true) => PrimaryAction::ServeBall,
        (GamePhase::Playing, false) => PrimaryAction::Pause,
        (GamePhase::Paused, _) => PrimaryAction::Resume,
    }
}

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, provider: &dyn LevelProvider, dt: f32) {
    // Clamp so a frame hitch cannot tunnel the ball through geometry
    let dt = dt.min(DT_MAX);

    let mut input = input.clone();
    if input.autopilot {
        autopilot(state, &mut input);
    }

    if input.restart {
        state.reset_session();
        let layout = provider.layout_for(state.level);
        state.load_level(&layout);
        state.phase = GamePhase::Playing;
        log::info!("game restarted");
    } else if input.escape {
        match state.phase {
            GamePhase::Playing | GamePhase::Paused => state.phase = GamePhase::Menu,
            GamePhase::Menu | GamePhase::SessionOver => state.quit = true,
        }
    } else if input.primary {
        match primary_action(state.phase, state.ball.held) {
            PrimaryAction::StartPlay => {
                let layout = provider.layout_for(state.level);
                state.load_level(&layout);
                state.phase = GamePhase::Playing;
            }
            PrimaryAction::RestartAndPlay => {
                state.reset_session();
                let layout = provider.layout_for(state.level);
                state.load_level(&layout);
                state.phase = GamePhase::Playing;
            }
            PrimaryAction::ServeBall => {
                let angle = state
                    .rng
                    .random_range(-SERVE_MAX_DEG..=SERVE_MAX_DEG)
                    .to_radians();
                state.ball.serve(angle);
            }
            PrimaryAction::Pause => state.phase = GamePhase::Paused,
            PrimaryAction::Resume => state.phase = GamePhase::Playing,
        }
    }

    // Paddle control works in every phase
    if let Some(x) = input.target_x {
        state.paddle.center_on(x);
    }
    state.paddle.velocity_x = input.axis.clamp(-1.0, 1.0) * PADDLE_SPEED;
    state.paddle.integrate(dt);

    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    if state.ball.held {
        state.ball.snap_to_paddle(&state.paddle);
    } else {
        let delta = state.ball.dir * state.ball.speed * dt;
        state.ball.rect.x += delta.x;
        state.ball.rect.y += delta.y;

        step_walls(state);
        step_paddle_bounce(state);
        step_bricks(state);
        step_out_of_bounds(state);
    }

    check_level_clear(state, provider);
    step_cosmetics(state, dt);
}

/// Demo-mode input synthesis: serve immediately, track the ball
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Menu => input.primary = true,
        GamePhase::Playing if state.ball.held => input.primary = true,
        _ => {}
    }
    input.target_x = Some(if state.ball.held {
        FIELD_WIDTH / 2.0
    } else {
        state.ball.rect.center_x()
    });
}

fn step_walls(state: &mut GameState) {
    if state.ball.rect.x <= 0.0 {
        state.ball.rect.x = 0.0;
        state.ball.dir.x = state.ball.dir.x.abs();
        state.push_event(GameEvent::WallBounce);
    }
    if state.ball.rect.right() >= FIELD_WIDTH {
        state.ball.rect.x = FIELD_WIDTH - state.ball.rect.w;
        state.ball.dir.x = -state.ball.dir.x.abs();
        state.push_event(GameEvent::WallBounce);
    }
    if state.ball.rect.y <= 0.0 {
        state.ball.rect.y = 0.0;
        state.ball.dir.y = state.ball.dir.y.abs();
        state.push_event(GameEvent::WallBounce);
    }
}

fn step_paddle_bounce(state: &mut GameState) {
    // Only a downward-moving ball can hit the paddle
    if state.ball.dir.y <= 0.0 || !overlaps(&state.ball.rect, &state.paddle.rect) {
        return;
    }
    let half_w = state.paddle.rect.w / 2.0;
    let offset = (state.ball.rect.center_x() - state.paddle.rect.center_x()) / half_w;
    let angle = (offset.clamp(-1.0, 1.0) * PADDLE_BOUNCE_MAX_DEG).to_radians();
    state.ball.dir = Vec2::new(angle.sin(), -angle.cos());
    state.ball.speed *= PADDLE_HIT_SPEED_GROWTH;
    // Reposition above the paddle so the hit cannot re-trigger next step
    state.ball.rect.y = state.paddle.rect.y - state.ball.rect.h - 1.0;
    state.push_event(GameEvent::PaddleBounce);
}

/// First live brick overlapping the ball, scanning in row-major order
fn first_live_hit(bricks: &[Brick], ball: &Rect) -> Option<usize> {
    bricks.iter().position(|b| b.alive && overlaps(ball, &b.rect))
}

fn step_bricks(state: &mut GameState) {
    // At most one brick is destroyed per step
    let Some(idx) = first_live_hit(&state.bricks, &state.ball.rect) else {
        return;
    };

    let pen = min_penetration_axis(&state.ball.rect, &state.bricks[idx].rect);
    match pen.axis {
        Axis::Left => {
            state.ball.rect.x -= pen.amount;
            state.ball.dir.x = -state.ball.dir.x.abs();
        }
        Axis::Right => {
            state.ball.rect.x += pen.amount;
            state.ball.dir.x = state.ball.dir.x.abs();
        }
        Axis::Top => {
            state.ball.rect.y -= pen.amount;
            state.ball.dir.y = -state.ball.dir.y.abs();
        }
        Axis::Bottom => {
            state.ball.rect.y += pen.amount;
            state.ball.dir.y = state.ball.dir.y.abs();
        }
    }

    let center = state.bricks[idx].rect.center();
    let color = state.bricks[idx].color;
    let special = state.bricks[idx].special;
    state.bricks[idx].alive = false;
    state.bricks[idx].special = false;
    state.bricks_remaining = state.bricks_remaining.saturating_sub(1);
    state.score += BRICK_SCORE * state.level;
    state.push_event(GameEvent::BrickBreak {
        color,
        x: center.x,
        y: center.y,
    });
    state.spawn_brick_particles(center, color);
    if special {
        state.spawn_collectible(center);
    }
    state.ball.speed *= BRICK_HIT_SPEED_GROWTH;
}

fn step_out_of_bounds(state: &mut GameState) {
    if state.ball.rect.y <= FIELD_HEIGHT {
        return;
    }
    state.lives = state.lives.saturating_sub(1);
    state.push_event(GameEvent::LifeLost);
    if state.lives == 0 {
        state.phase = GamePhase::SessionOver;
        state.outcome = Some(SessionOutcome::Defeat);
        state.push_event(GameEvent::SessionLost { score: state.score });
        log::info!("session over: defeat, final score {}", state.score);
    } else {
        state.rearm_after_life_loss();
    }
}

fn check_level_clear(state: &mut GameState, provider: &dyn LevelProvider) {
    if state.phase != GamePhase::Playing || state.bricks_remaining > 0 {
        return;
    }
    state.push_event(GameEvent::LevelCleared { level: state.level });
    state.level += 1;
    if state.level > MAX_LEVELS {
        state.phase = GamePhase::SessionOver;
        state.outcome = Some(SessionOutcome::Victory);
        state.push_event(GameEvent::SessionWon { score: state.score });
        log::info!("session over: victory, final score {}", state.score);
    } else {
        log::debug!("level {} cleared, loading level {}", state.level - 1, state.level);
        let layout = provider.layout_for(state.level);
        state.load_level(&layout);
    }
}

/// Particles and collectibles: purely visual, never feed back into collisions
fn step_cosmetics(state: &mut GameState, dt: f32) {
    for p in state.particles.iter_mut() {
        p.pos += p.vel * dt;
        p.vel.y += PARTICLE_GRAVITY * dt;
        p.age += dt;
    }
    state.particles.retain(|p| p.age < p.max_age);

    for c in state.collectibles.iter_mut() {
        c.rect.x += c.vel.x * dt;
        c.rect.y += c.vel.y * dt;
    }
    let paddle_rect = state.paddle.rect;
    let mut caught = 0u32;
    state.collectibles.retain(|c| {
        if overlaps(&c.rect, &paddle_rect) {
            caught += 1;
            return false;
        }
        c.rect.y <= FIELD_HEIGHT
    });
    for _ in 0..caught {
        state.paddle.widen();
    }
}
