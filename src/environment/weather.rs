//! Sky scenarios, clouds, rain and lightning
//!
//! The scenario is picked from the score (one level per 50 points) and walks
//! a fixed cyclic sequence. Intro and menu force their own scenario.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{Field, GameMode};

/// Points per weather level
pub const POINTS_PER_LEVEL: u32 = 50;
/// Cloud spawn cadence (ticks)
pub const CLOUD_INTERVAL: u64 = 120;
/// Rain spawn cadence (ticks)
pub const RAIN_INTERVAL: u64 = 2;
/// Horizontal wind drift of rain (pixels/tick)
pub const RAIN_WIND: f32 = 2.0;
/// Per-tick chance of a lightning strike while raining
pub const LIGHTNING_CHANCE: f32 = 0.005;
/// Strike lifetime (ticks)
pub const LIGHTNING_TICKS: u32 = 10;
/// The flash is only drawn while the timer is above this
pub const LIGHTNING_FLASH_UNTIL: u32 = 5;

/// Named sky setups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    DayClear,
    NightClear,
    DayRain,
    NightRain,
}

/// Scenario for each level, cycled
pub const SEQUENCE: [Scenario; 6] = [
    Scenario::DayClear,
    Scenario::NightClear,
    Scenario::NightRain,
    Scenario::NightClear,
    Scenario::DayClear,
    Scenario::DayRain,
];

impl Scenario {
    pub fn for_level(level: u32) -> Self {
        SEQUENCE[level as usize % SEQUENCE.len()]
    }

    pub fn rain(&self) -> bool {
        matches!(self, Scenario::DayRain | Scenario::NightRain)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::DayClear => "DAY_CLEAR",
            Scenario::NightClear => "NIGHT_CLEAR",
            Scenario::DayRain => "DAY_RAIN",
            Scenario::NightRain => "NIGHT_RAIN",
        }
    }

    /// Background gradient stops, top to bottom (0xRRGGBB)
    pub fn sky(&self) -> &'static [u32] {
        match self {
            Scenario::DayClear => &[0x4FACFE, 0x00F2FE],
            Scenario::NightClear => &[0x0F2027, 0x203A43, 0x2C5364],
            Scenario::DayRain => &[0x3A6073, 0x3A7BD5],
            Scenario::NightRain => &[0x000000, 0x434343],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainDrop {
    pub pos: Vec2,
    pub len: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lightning {
    pub active: bool,
    pub timer: u32,
    pub x: f32,
    pub flash: f32,
}

impl Lightning {
    /// Whether the full-screen flash is showing this tick
    pub fn flash_visible(&self) -> bool {
        self.active && self.timer > LIGHTNING_FLASH_UNTIL
    }
}

/// All weather state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    /// Highest level applied this run (None before the first update)
    pub level: Option<u32>,
    pub scenario: Scenario,
    pub raining: bool,
    pub clouds: Vec<Cloud>,
    pub drops: Vec<RainDrop>,
    pub lightning: Lightning,
}

impl Default for Weather {
    fn default() -> Self {
        Self {
            level: None,
            scenario: Scenario::DayClear,
            raining: false,
            clouds: Vec::new(),
            drops: Vec::new(),
            lightning: Lightning::default(),
        }
    }
}

impl Weather {
    /// Forget the level and all transient weather (new run)
    pub fn reset(&mut self) {
        self.level = None;
        self.raining = false;
        self.clouds.clear();
        self.drops.clear();
    }

    fn apply(&mut self, scenario: Scenario) {
        if scenario != self.scenario {
            log::info!("Weather: {} -> {}", self.scenario.as_str(), scenario.as_str());
        }
        self.scenario = scenario;
        self.raining = scenario.rain();
    }

    pub fn update<R: Rng>(
        &mut self,
        score: u32,
        mode: GameMode,
        frame: u64,
        field: &Field,
        settings: &Settings,
        rng: &mut R,
    ) {
        let level = score / POINTS_PER_LEVEL;
        if self.level.is_none_or(|current| level > current) {
            self.level = Some(level);
            self.apply(Scenario::for_level(level));
        }

        match mode {
            GameMode::Intro => self.apply(Scenario::NightRain),
            GameMode::Menu => self.apply(Scenario::DayClear),
            _ => {}
        }

        self.update_clouds(frame, field, rng);

        if self.raining && settings.weather {
            self.update_rain(frame, field, settings.max_rain_drops(), rng);
            self.update_lightning(field, settings.flash_opacity(), rng);
        } else {
            self.drops.clear();
            self.lightning.active = false;
        }
    }

    fn update_clouds<R: Rng>(&mut self, frame: u64, field: &Field, rng: &mut R) {
        if frame.is_multiple_of(CLOUD_INTERVAL) {
            self.clouds.push(Cloud {
                pos: Vec2::new(field.width, rng.random_range(0.0..field.height / 2.0)),
                size: Vec2::new(rng.random_range(80.0..120.0), rng.random_range(50.0..70.0)),
                speed: rng.random_range(0.5..1.5),
            });
        }
        for cloud in &mut self.clouds {
            cloud.pos.x -= cloud.speed;
        }
        self.clouds.retain(|c| c.pos.x + c.size.x >= 0.0);
    }

    fn update_rain<R: Rng>(&mut self, frame: u64, field: &Field, cap: usize, rng: &mut R) {
        if frame.is_multiple_of(RAIN_INTERVAL) && self.drops.len() < cap {
            self.drops.push(RainDrop {
                pos: Vec2::new(rng.random_range(0.0..field.width), -20.0),
                len: rng.random_range(10.0..30.0),
                speed: rng.random_range(10.0..15.0),
            });
        }
        for drop in &mut self.drops {
            drop.pos.y += drop.speed;
            drop.pos.x -= RAIN_WIND;
        }
        self.drops.retain(|d| d.pos.y <= field.height);
    }

    fn update_lightning<R: Rng>(&mut self, field: &Field, flash: f32, rng: &mut R) {
        if !self.lightning.active && rng.random::<f32>() < LIGHTNING_CHANCE {
            self.lightning = Lightning {
                active: true,
                timer: LIGHTNING_TICKS,
                x: rng.random_range(0.0..field.width),
                flash,
            };
        }

        if self.lightning.active {
            self.lightning.timer = self.lightning.timer.saturating_sub(1);
            if self.lightning.timer == 0 {
                self.lightning.active = false;
            }
        }
    }
}
