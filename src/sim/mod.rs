//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Bounded timestep only
//! - Seeded RNG only
//! - Stable iteration order (row-major brick scan)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Axis, Penetration, min_penetration_axis, overlaps};
pub use level::{Cell, FileLevels, Layout, LevelProvider, ProceduralLevels, parse_layout};
pub use rect::Rect;
pub use state::{
    Ball, Brick, Collectible, GameEvent, GamePhase, GameState, Paddle, Particle, SessionOutcome,
    menu_play_rect,
};
pub use tick::{TickInput, tick};
