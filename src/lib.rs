//! Glider Run - a side-scrolling glider arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scheduler, physics, obstacles, game modes)
//! - `environment`: Cosmetic weather, lighting and particle effects
//! - `input`: Keyboard/pointer normalization into game commands
//! - `render`: Per-tick draw data for the presentation layer
//! - `ui`: Score display and overlay collaborators
//! - `tuning` / `settings`: Data-driven game balance and cosmetic preferences
//! - `game`: Glue that drives everything from a display callback

pub mod environment;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use settings::{ConfigError, QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::FRAC_PI_4;

    /// Logical update rate (ticks per second)
    pub const TICK_RATE: f64 = 60.0;
    /// Fixed tick interval in milliseconds
    pub const TICK_INTERVAL_MS: f64 = 1000.0 / TICK_RATE;

    /// Default play field size (canvas pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Glider defaults
    pub const GLIDER_X: f32 = 50.0;
    pub const GLIDER_START_Y: f32 = 150.0;
    pub const GLIDER_WIDTH: f32 = 50.0;
    pub const GLIDER_HEIGHT: f32 = 35.0;
    /// Obstacle hit box is the sprite box shrunk by this much on every side
    pub const GLIDER_HIT_INSET: f32 = 5.0;
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.25;
    /// Upward speed assigned on fly (pixels/tick)
    pub const JUMP: f32 = 4.6;
    /// Visual tilt per unit of vertical velocity (radians)
    pub const TILT_PER_VELOCITY: f32 = 0.1;
    /// Maximum visual tilt either way
    pub const MAX_TILT: f32 = FRAC_PI_4;
    /// Crash fall speed after game over (pixels/tick)
    pub const CRASH_FALL_SPEED: f32 = 5.0;

    /// Auto-pilot bobbing in the intro (amplitude px, rate rad/tick)
    pub const INTRO_BOB_AMPLITUDE: f32 = 50.0;
    pub const INTRO_BOB_RATE: f32 = 0.1;
    /// Gentler bobbing behind the menu
    pub const MENU_BOB_AMPLITUDE: f32 = 20.0;
    pub const MENU_BOB_RATE: f32 = 0.05;

    /// Obstacle defaults
    pub const GAP: f32 = 150.0;
    pub const BASE_SPEED: f32 = 3.0;
    pub const SPAWN_INTERVAL: u64 = 100;
    pub const SPAWN_MARGIN_TOP: f32 = 50.0;
    pub const SPAWN_MARGIN_BOTTOM: f32 = 100.0;
    /// Hit span is [x + HIT_SPAN_START, x + HIT_SPAN_END) (pole + flag)
    pub const HIT_SPAN_START: f32 = 10.0;
    pub const HIT_SPAN_END: f32 = 70.0;
    /// Obstacle counts as cleared once x + SCORE_EDGE is left of the glider
    pub const SCORE_EDGE: f32 = 110.0;
    /// Obstacle is retired once x + RETIRE_EDGE is left of the field
    pub const RETIRE_EDGE: f32 = 70.0;
    /// Flag pole and pennant widths (draw data only)
    pub const POLE_WIDTH: f32 = 10.0;
    pub const FLAG_WIDTH: f32 = 50.0;

    /// Obstacle flag colors (0xRRGGBB)
    pub const PALETTE: [u32; 9] = [
        0x00FF00, 0xFFFF00, 0x0000FF, 0xFF0000, 0x800080, 0xFFFFFF, 0x000000, 0x808080, 0xFFC0CB,
    ];

    /// Scoring
    pub const POINTS_PER_OBSTACLE: u32 = 10;
    pub const MILESTONE_EVERY: u32 = 50;

    /// Mode timers (ticks)
    pub const INTRO_TICKS: u32 = 180;
    pub const COUNTDOWN_TICKS: u32 = 180;
}

/// Visual tilt for a vertical velocity, clamped to ±[`consts::MAX_TILT`]
#[inline]
pub fn tilt_for_velocity(velocity: f32) -> f32 {
    (velocity * consts::TILT_PER_VELOCITY).clamp(-consts::MAX_TILT, consts::MAX_TILT)
}

/// True when `score` is a positive multiple of `every`
#[inline]
pub fn is_milestone(score: u32, every: u32) -> bool {
    every > 0 && score > 0 && score.is_multiple_of(every)
}
