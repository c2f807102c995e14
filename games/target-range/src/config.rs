use std::fmt;

use range_engine::Rgba;
use serde::{Deserialize, Serialize};

const RED: Rgba = Rgba::new(217.0 / 255.0, 4.0 / 255.0, 41.0 / 255.0, 1.0);
const WHITE: Rgba = Rgba::new(237.0 / 255.0, 242.0 / 255.0, 244.0 / 255.0, 1.0);

/// Upper bound on `max_shots`. The indicator meter publishes one value per shot.
pub const MAX_SHOTS: u32 = 100;

/// How the shot meter is presented next to the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeterStyle {
    /// One indicator per shot, used ones switched off.
    Indicators,
    /// A single bar filled to the remaining percentage.
    Fill,
}

/// Game tunables, loadable from JSON. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub max_shots: u32,
    pub target_radius: f32,
    pub hit_reward: u32,
    /// Horizontal speed magnitude range `[lo, hi)` in px/frame.
    pub speed_x: [f32; 2],
    /// Vertical speed magnitude range `[lo, hi)` in px/frame.
    pub speed_y: [f32; 2],
    pub meter: MeterStyle,
    /// Ring colours, outermost first; the rings alternate between the two.
    pub ring_colors: [Rgba; 2],
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            max_shots: 10,
            target_radius: 50.0,
            hit_reward: 100,
            speed_x: [3.0, 5.0],
            speed_y: [2.0, 4.0],
            meter: MeterStyle::Indicators,
            ring_colors: [RED, WHITE],
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// Not valid JSON, or a field has the wrong type.
    Parse(serde_json::Error),
    /// Well-formed but unplayable.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "malformed config: {}", err),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl RangeConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(reason))
        };

        if !(1..=MAX_SHOTS).contains(&self.max_shots) {
            return invalid(format!("max_shots must be 1..={}, got {}", MAX_SHOTS, self.max_shots));
        }
        if self.hit_reward.checked_mul(self.max_shots).is_none() {
            return invalid(format!(
                "{} shots at {} points each overflow the score",
                self.max_shots, self.hit_reward
            ));
        }
        if !(self.target_radius.is_finite() && self.target_radius > 0.0) {
            return invalid(format!("target_radius must be positive, got {}", self.target_radius));
        }
        let diameter = self.target_radius * 2.0;
        if !(self.world_width >= diameter && self.world_height >= diameter) {
            return invalid(format!(
                "a target of radius {} does not fit a {}x{} world",
                self.target_radius, self.world_width, self.world_height
            ));
        }
        for (axis, [lo, hi]) in [("speed_x", self.speed_x), ("speed_y", self.speed_y)] {
            if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo < hi) {
                return invalid(format!("{} must satisfy 0 <= lo < hi, got [{}, {}]", axis, lo, hi));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RangeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_shots, 10);
        assert_eq!(config.hit_reward, 100);
        assert_eq!(config.ring_colors[0], Rgba::from_hex("#d90429").unwrap());
        assert_eq!(config.ring_colors[1], Rgba::from_hex("#edf2f4").unwrap());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RangeConfig::from_json(r#"{ "max_shots": 5, "meter": "fill" }"#).unwrap();
        assert_eq!(config.max_shots, 5);
        assert_eq!(config.meter, MeterStyle::Fill);
        assert_eq!(config.target_radius, 50.0);
        assert_eq!(config.speed_x, [3.0, 5.0]);
    }

    #[test]
    fn parses_ring_colours() {
        let config =
            RangeConfig::from_json(r##"{ "ring_colors": ["#000000", "#ffffff"] }"##).unwrap();
        assert_eq!(config.ring_colors[1], Rgba::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(RangeConfig::from_json("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            RangeConfig::from_json(r#"{ "meter": "dial" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unplayable_values() {
        for json in [
            r#"{ "max_shots": 0 }"#,
            r#"{ "max_shots": 4000000000 }"#,
            r#"{ "max_shots": 101 }"#,
            r#"{ "hit_reward": 4294967295, "max_shots": 3 }"#,
            r#"{ "target_radius": 0 }"#,
            r#"{ "target_radius": 400 }"#,
            r#"{ "speed_x": [5, 3] }"#,
            r#"{ "speed_y": [-1, 2] }"#,
        ] {
            let err = RangeConfig::from_json(json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{} gave {}", json, err);
        }
    }

    #[test]
    fn largest_possible_score_fits() {
        let json = format!(
            r#"{{ "max_shots": {}, "hit_reward": {} }}"#,
            MAX_SHOTS,
            u32::MAX / MAX_SHOTS
        );
        let config = RangeConfig::from_json(&json).unwrap();
        assert!(config.hit_reward.checked_mul(config.max_shots).is_some());
    }
}
