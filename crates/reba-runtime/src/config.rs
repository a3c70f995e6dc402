//! Session configuration

use std::path::Path;

use reba_core::{RebaError, RebaResult};
use reba_exposure::ExposureConfig;
use reba_pose::PoseConfig;
use reba_score::{ComposerConfig, MAX_FORCE_LOAD};
use serde::{Deserialize, Serialize};

/// Configuration of one analysis session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Landmark geometry thresholds
    pub pose: PoseConfig,
    /// Exposure model
    pub exposure: ExposureConfig,
    /// Final score composition
    pub composer: ComposerConfig,
    /// User-supplied force/load base score (0-2)
    pub force_load_base: u8,
}

impl SessionConfig {
    /// Configuration for detectors that report inflated visibility
    pub fn strict() -> Self {
        SessionConfig {
            pose: PoseConfig::strict(),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> RebaResult<Self> {
        let config: SessionConfig = serde_json::from_str(json)
            .map_err(|e| RebaError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> RebaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reject values the engine cannot honor
    pub fn validate(&self) -> RebaResult<()> {
        if self.force_load_base > MAX_FORCE_LOAD {
            return Err(RebaError::InvalidForceLoad(self.force_load_base));
        }

        let pose = &self.pose;
        if !(0.0..=1.0).contains(&pose.visibility_threshold) {
            return Err(RebaError::InvalidConfig(format!(
                "visibility_threshold must be within [0, 1], got {}",
                pose.visibility_threshold
            )));
        }

        let non_negative = [
            ("offset_threshold", pose.offset_threshold),
            ("abduction_degrees", pose.abduction_degrees),
            ("wrist_deviation_degrees", pose.wrist_deviation_degrees),
            ("support_distance", pose.support_distance),
            (
                "significant_change_degrees",
                self.exposure.significant_change_degrees,
            ),
            (
                "activity_exposure_secs",
                self.composer.activity_exposure_secs,
            ),
            (
                "activity_frequency_per_min",
                self.composer.activity_frequency_per_min,
            ),
            (
                "force_frequency_per_min",
                self.composer.force_frequency_per_min,
            ),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(RebaError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
