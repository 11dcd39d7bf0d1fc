//! Game session and core simulation types
//!
//! One owned `GameSession` holds everything the tick loop mutates. Nothing
//! here is global; the state machine in `tick.rs` receives it explicitly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::glider::Glider;
use super::obstacles::ObstacleField;
use crate::tuning::Tuning;

/// Coarse game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Attract sequence before the menu appears
    Intro,
    /// Waiting for the start command
    Menu,
    /// A run is in progress (possibly still counting down)
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Intro => "Intro",
            GameMode::Menu => "Menu",
            GameMode::Playing => "Playing",
            GameMode::GameOver => "GameOver",
        }
    }
}

/// Visible play field. The floor is the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Notifications produced by a tick for the collaborators outside the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Intro finished, menu overlay should appear
    ShowMenu,
    /// A run started; overlays go away
    HideOverlays,
    /// A run started; cosmetics reset their per-run state
    RunStarted,
    /// Score display update (`milestone` drives the pulse)
    ScoreChanged { score: u32, milestone: bool },
    /// Run ended with this score
    ShowGameOver { final_score: u32 },
    /// One-shot impact at the glider's center
    Crash { at: Vec2 },
    /// Wreck is burning: flames at `fire`, smoke rises from `smoke`
    Burning { fire: Vec2, smoke: Vec2 },
}

/// Complete game session (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Balance and geometry this session was built with
    pub tuning: Tuning,
    /// Spawn RNG
    pub rng: Pcg32,
    /// Play field dimensions
    pub field: Field,
    /// Current mode
    pub mode: GameMode,
    /// Tick counter, reset on run start
    pub frame_count: u64,
    /// Score (+10 per obstacle cleared)
    pub score: u32,
    /// Pre-play delay remaining (ticks)
    pub countdown_ticks: u32,
    /// Ticks spent in the intro
    pub intro_ticks: u32,
    /// The player
    pub glider: Glider,
    /// Obstacles in arrival order
    pub obstacles: ObstacleField,
    /// Collision that ended the last run
    pub last_crash: Option<super::CollisionResult>,
    /// Pending notifications (drained by the caller each tick)
    pub events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a new session in the intro
    pub fn new(tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            rng: Pcg32::seed_from_u64(tuning.seed),
            field: Field::new(tuning.field_width, tuning.field_height),
            mode: GameMode::Intro,
            frame_count: 0,
            score: 0,
            countdown_ticks: 0,
            intro_ticks: 0,
            glider: Glider::from_tuning(&tuning),
            obstacles: ObstacleField::from_tuning(&tuning),
            last_crash: None,
            events: Vec::new(),
            tuning,
        }
    }

    /// True while a run is active and the countdown has elapsed
    pub fn is_live(&self) -> bool {
        self.mode == GameMode::Playing && self.countdown_ticks == 0
    }

    /// Countdown label (`ceil(ticks / 60)`) while a run is getting ready
    pub fn countdown_seconds(&self) -> Option<u32> {
        if self.mode == GameMode::Playing && self.countdown_ticks > 0 {
            Some(self.countdown_ticks.div_ceil(crate::consts::TICK_RATE as u32))
        } else {
            None
        }
    }

    /// Resize the field; spawn range and floor follow on the next tick
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Field::new(width, height);
        log::debug!("Field resized to {}x{}", self.field.width, self.field.height);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_intro() {
        let session = GameSession::new(Tuning::default());
        assert_eq!(session.mode, GameMode::Intro);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert!(!session.is_live());
        assert_eq!(session.countdown_seconds(), None);
    }

    #[test]
    fn test_countdown_label_rounds_up() {
        let mut session = GameSession::new(Tuning::default());
        session.mode = GameMode::Playing;
        session.countdown_ticks = 180;
        assert_eq!(session.countdown_seconds(), Some(3));
        session.countdown_ticks = 121;
        assert_eq!(session.countdown_seconds(), Some(3));
        session.countdown_ticks = 120;
        assert_eq!(session.countdown_seconds(), Some(2));
        session.countdown_ticks = 1;
        assert_eq!(session.countdown_seconds(), Some(1));
        session.countdown_ticks = 0;
        assert_eq!(session.countdown_seconds(), None);
        assert!(session.is_live());
    }

    #[test]
    fn test_field_never_degenerate() {
        let field = Field::new(0.0, -10.0);
        assert_eq!(field.width, 1.0);
        assert_eq!(field.height, 1.0);
    }
}
