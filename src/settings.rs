//! Cosmetic settings and preferences
//!
//! Stored separately from gameplay tuning; none of these affect the
//! simulation, only how much weather and particle work the cosmetics do.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Errors loading a JSON config file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "read failed: {}", e),
            ConfigError::Parse(e) => write!(f, "invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Cosmetic quality levels, cheapest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

/// How many cosmetic objects a preset may keep alive at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectBudget {
    pub particles: usize,
    pub rain_drops: usize,
}

impl QualityPreset {
    pub const ALL: [QualityPreset; 3] = [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Case-insensitive preset name (as typed on the command line)
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(name))
    }

    pub fn budget(&self) -> EffectBudget {
        let (particles, rain_drops) = match self {
            QualityPreset::Low => (100, 60),
            QualityPreset::Medium => (500, 200),
            QualityPreset::High => (2000, 600),
        };
        EffectBudget { particles, rain_drops }
    }
}

/// Cosmetic preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Rain and lightning (the sky scenario still follows the score)
    pub weather: bool,
    /// Fire, smoke and explosion particles
    pub particles: bool,
    /// Screen cracks on crash
    pub cracks: bool,
    /// Reduced motion (no lightning flash)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            weather: true,
            particles: true,
            cracks: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (Low also drops the crack overlay)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        if preset == QualityPreset::Low {
            self.cracks = false;
        }
    }

    /// Particle cap after the particles toggle
    pub fn max_particles(&self) -> usize {
        if self.particles { self.quality.budget().particles } else { 0 }
    }

    /// Rain cap after the weather toggle
    pub fn max_rain_drops(&self) -> usize {
        if self.weather { self.quality.budget().rain_drops } else { 0 }
    }

    /// Lightning flash opacity (respects reduced_motion)
    pub fn flash_opacity(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { 0.5 }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_json(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
