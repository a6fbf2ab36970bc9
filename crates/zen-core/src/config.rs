use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::parse_hex_color;
use crate::shapes::Shape;

/// Swatches offered by the control surface.
pub const COLOR_PRESETS: [&str; 7] = [
    "#ffffff", "#ff5555", "#55ff55", "#5555ff", "#ff55ff", "#55ffff", "#ffff55",
];

/// Slider range for the particle count. The core accepts any positive count.
pub const PARTICLE_COUNT_RANGE: (usize, usize) = (1000, 15000);
pub const NOISE_RANGE: (f32, f32) = (0.0, 5.0);
pub const SIZE_RANGE: (f32, f32) = (0.1, 3.0);

/// Snapshot of the user-facing settings. Field names follow the UI's JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub particle_count: usize,
    pub base_color: String,
    pub shape: Shape,
    pub enable_gesture_control: bool,
    pub noise_strength: f32,
    pub interaction_strength: f32,
    pub size: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: 8000,
            base_color: "#55ffff".to_string(),
            shape: Shape::Sphere,
            enable_gesture_control: false,
            noise_strength: 1.0,
            interaction_strength: 1.0,
            size: 1.2,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject settings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::InvalidParticleCount(self.particle_count));
        }
        self.base_rgb()?;
        check_range("noiseStrength", self.noise_strength, NOISE_RANGE)?;
        check_range("size", self.size, SIZE_RANGE)?;
        if !self.interaction_strength.is_finite() || self.interaction_strength <= 0.0 {
            return Err(ConfigError::InvalidRange {
                field: "interactionStrength",
                value: self.interaction_strength,
            });
        }
        Ok(())
    }

    /// Base color as rgb in `[0, 1]`.
    pub fn base_rgb(&self) -> Result<Vec3, ConfigError> {
        parse_hex_color(&self.base_color)
            .ok_or_else(|| ConfigError::InvalidColor(self.base_color.clone()))
    }
}

fn check_range(field: &'static str, value: f32, (lo, hi): (f32, f32)) -> Result<(), ConfigError> {
    if value.is_finite() && (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { field, value })
    }
}
