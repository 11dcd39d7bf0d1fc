//! Score display and screen overlay collaborators
//!
//! The core never touches the HUD directly; it hands these notifications to
//! whatever implements [`Presenter`].

use serde::{Deserialize, Serialize};

/// Milestone pulse duration (500ms at 60 Hz)
pub const PULSE_TICKS: u32 = 30;

/// Receives HUD and overlay notifications. Every method defaults to a no-op.
pub trait Presenter {
    /// Score text changed; `milestone` asks for the pulse animation
    fn score_changed(&mut self, _score: u32, _milestone: bool) {}
    /// Intro finished
    fn show_menu(&mut self) {}
    /// Run ended
    fn show_game_over(&mut self, _final_score: u32) {}
    /// A run started
    fn hide_overlays(&mut self) {}
}

/// Presenter that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Which overlay screen is up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    None,
    Menu,
    GameOver { final_score: u32 },
}

/// Plain HUD model a renderer can draw from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub overlay: Overlay,
    /// Remaining ticks of the milestone pulse
    pub pulse_ticks: u32,
}

impl Hud {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn pulsing(&self) -> bool {
        self.pulse_ticks > 0
    }

    /// Age the pulse by one tick
    pub fn tick(&mut self) {
        self.pulse_ticks = self.pulse_ticks.saturating_sub(1);
    }
}

impl Presenter for Hud {
    fn score_changed(&mut self, score: u32, milestone: bool) {
        self.score = score;
        if milestone {
            self.pulse_ticks = PULSE_TICKS;
        }
    }

    fn show_menu(&mut self) {
        self.overlay = Overlay::Menu;
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.overlay = Overlay::GameOver { final_score };
    }

    fn hide_overlays(&mut self) {
        self.overlay = Overlay::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_lasts_half_a_second() {
        let mut hud = Hud::default();
        hud.score_changed(50, true);
        assert!(hud.pulsing());
        for _ in 0..PULSE_TICKS {
            hud.tick();
        }
        assert!(!hud.pulsing());
        assert_eq!(hud.score_text(), "Score: 50");
    }

    #[test]
    fn test_overlays() {
        let mut hud = Hud::default();
        hud.show_menu();
        assert_eq!(hud.overlay, Overlay::Menu);
        hud.show_game_over(30);
        assert_eq!(hud.overlay, Overlay::GameOver { final_score: 30 });
        hud.hide_overlays();
        assert_eq!(hud.overlay, Overlay::None);
    }
}
