//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Seeded RNG only
//! - No rendering, audio, file or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Rgb};
pub use tick::{TickInput, tick};
