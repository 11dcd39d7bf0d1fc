//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON file. Missing keys
//! fall back to the values in [`crate::consts`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;
use crate::settings::{ConfigError, read_json};

/// Gameplay balance and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seed for obstacle placement and cosmetics
    pub seed: u64,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Glider ===
    pub glider_x: f32,
    pub glider_start_y: f32,
    pub glider_width: f32,
    pub glider_height: f32,
    pub hit_inset: f32,
    pub gravity: f32,
    pub jump: f32,
    pub crash_fall_speed: f32,

    // === Obstacles ===
    pub gap: f32,
    pub base_speed: f32,
    pub spawn_interval: u64,
    pub spawn_margin_top: f32,
    pub spawn_margin_bottom: f32,
    pub hit_span_start: f32,
    pub hit_span_end: f32,
    pub score_edge: f32,
    pub retire_edge: f32,
    pub palette: Vec<u32>,

    // === Scoring ===
    pub points_per_obstacle: u32,
    pub milestone_every: u32,

    // === Timers (ticks) ===
    pub intro_ticks: u32,
    pub countdown_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: 0x5EED,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            glider_x: GLIDER_X,
            glider_start_y: GLIDER_START_Y,
            glider_width: GLIDER_WIDTH,
            glider_height: GLIDER_HEIGHT,
            hit_inset: GLIDER_HIT_INSET,
            gravity: GRAVITY,
            jump: JUMP,
            crash_fall_speed: CRASH_FALL_SPEED,

            gap: GAP,
            base_speed: BASE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            spawn_margin_top: SPAWN_MARGIN_TOP,
            spawn_margin_bottom: SPAWN_MARGIN_BOTTOM,
            hit_span_start: HIT_SPAN_START,
            hit_span_end: HIT_SPAN_END,
            score_edge: SCORE_EDGE,
            retire_edge: RETIRE_EDGE,
            palette: PALETTE.to_vec(),

            points_per_obstacle: POINTS_PER_OBSTACLE,
            milestone_every: MILESTONE_EVERY,

            intro_ticks: INTRO_TICKS,
            countdown_ticks: COUNTDOWN_TICKS,
        }
    }
}

impl Tuning {
    /// Default tuning with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_json(path.as_ref())
    }

    /// Load from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would stall or break the simulation
    pub fn sanitized(mut self) -> Self {
        if self.spawn_interval == 0 {
            log::warn!("spawn_interval 0 is invalid, using 1");
            self.spawn_interval = 1;
        }
        if self.palette.is_empty() {
            log::warn!("Empty obstacle palette, using default colors");
            self.palette = PALETTE.to_vec();
        }
        if self.gap < 0.0 {
            log::warn!("Negative gap {}, using default", self.gap);
            self.gap = GAP;
        }
        let max_inset = self.glider_width.min(self.glider_height) / 2.0;
        self.hit_inset = self.hit_inset.clamp(0.0, max_inset.max(0.0));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "seed": 7 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.seed, 7);
        assert_eq!(tuning.jump, JUMP);
        assert_eq!(tuning.palette, PALETTE.to_vec());
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::with_seed(42);
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default("/definitely/not/here/tuning.json");
        assert_eq!(tuning, Tuning::default());
        assert!(matches!(
            Tuning::load("/definitely/not/here/tuning.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_sanitized_fixes_degenerate_values() {
        let tuning = Tuning {
            spawn_interval: 0,
            palette: Vec::new(),
            hit_inset: 100.0,
            ..Tuning::default()
        }
        .sanitized();
        assert_eq!(tuning.spawn_interval, 1);
        assert_eq!(tuning.palette, PALETTE.to_vec());
        assert_eq!(tuning.hit_inset, GLIDER_HEIGHT / 2.0);
    }
}
