//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed-rate ticks only (the scheduler decides when, never how far)
//! - Seeded RNG only
//! - Stable iteration order (obstacles in arrival order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod glider;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use clock::FrameScheduler;
pub use collision::{CollisionResult, ObstaclePart, Rect};
pub use glider::Glider;
pub use obstacles::{FieldOutcome, Obstacle, ObstacleField};
pub use state::{Field, GameEvent, GameMode, GameSession};
pub use tick::{start, tick};
