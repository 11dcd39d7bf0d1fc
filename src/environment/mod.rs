//! Cosmetic environment: weather, day/night scenarios and crash effects
//!
//! Fed one way from the core: `(score, mode)` every tick plus the crash and
//! burning events. Nothing here is ever read back by the simulation, and it
//! draws from its own RNG stream so cosmetics can't change a run's outcome.

pub mod particles;
pub mod weather;

pub use particles::{Crack, Effects, Particle, ParticleKind};
pub use weather::{Cloud, Lightning, RainDrop, Scenario, Weather};

use glam::Vec2;
use rand_pcg::Pcg32;

use crate::settings::Settings;
use crate::sim::{Field, GameEvent, GameMode};

/// PCG stream reserved for cosmetics
const COSMETIC_STREAM: u64 = 0xC0FFEE;
/// Smoke puff cadence while burning (ticks)
pub const SMOKE_INTERVAL: u64 = 5;

/// Owns all cosmetic state
#[derive(Debug, Clone)]
pub struct Environment {
    settings: Settings,
    rng: Pcg32,
    /// Ticks since the last run start
    frame: u64,
    pub weather: Weather,
    pub effects: Effects,
}

impl Environment {
    pub fn new(seed: u64, settings: Settings) -> Self {
        Self {
            settings,
            rng: Pcg32::new(seed, COSMETIC_STREAM),
            frame: 0,
            weather: Weather::default(),
            effects: Effects::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        log::info!("Cosmetic quality: {}", settings.quality.as_str());
        self.settings = settings;
        let cap = self.settings.max_particles();
        self.effects.particles.truncate(cap);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn scenario(&self) -> Scenario {
        self.weather.scenario
    }

    /// React to a core event (ignores the ones meant for the HUD)
    pub fn handle(&mut self, event: &GameEvent, field: &Field) {
        match event {
            GameEvent::RunStarted => self.reset_run(),
            GameEvent::Crash { at } => self.on_crash(*at, field),
            GameEvent::Burning { fire, smoke } => self.on_burning(*fire, *smoke),
            _ => {}
        }
    }

    /// Clear per-run weather and leftover wreckage
    pub fn reset_run(&mut self) {
        self.frame = 0;
        self.weather.reset();
        self.effects.clear();
    }

    /// One-shot crash: burst at the glider, cracks across the screen
    pub fn on_crash(&mut self, at: Vec2, field: &Field) {
        let cap = self.settings.max_particles();
        self.effects.explode(at, cap, &mut self.rng);
        if self.settings.cracks {
            self.effects.shatter(field.center(), &mut self.rng);
        }
    }

    /// Continuous flames, plus a smoke puff every few ticks
    pub fn on_burning(&mut self, fire: Vec2, smoke: Vec2) {
        let cap = self.settings.max_particles();
        self.effects.burn(fire, ParticleKind::Fire, cap, &mut self.rng);
        if self.frame.is_multiple_of(SMOKE_INTERVAL) {
            self.effects.burn(smoke, ParticleKind::Smoke, cap, &mut self.rng);
        }
    }

    /// Per-tick update from the current score and mode
    pub fn update(&mut self, score: u32, mode: GameMode, field: &Field) {
        self.weather
            .update(score, mode, self.frame, field, &self.settings, &mut self.rng);
        self.effects.update();
        self.frame += 1;
    }
}
