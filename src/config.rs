//! Construction-time configuration
//!
//! Values are handed to the constructors explicitly; nothing here reads the
//! environment.

use derive_more::{Display, Error};
use embassy_time::Duration;

use crate::effect::EffectId;

pub const DEFAULT_WIDTH: usize = 60;
pub const DEFAULT_HEIGHT: usize = 1;
pub const DEFAULT_FRAME_RATE: u32 = 24;
pub const DEFAULT_COMMIT_CADENCE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("canvas width and height must be non-zero")]
    ZeroDimension,
    #[display("frame rate must be non-zero")]
    ZeroFrameRate,
    #[display("commit cadence must be non-zero")]
    ZeroCommitCadence,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    /// Transport cycles per second
    pub frame_rate: u32,
    /// Pixel messages per full-frame commit
    pub commit_cadence: u32,
    /// Effect selected on start and when an unknown name is requested
    pub default_effect: &'static str,
    /// Send one all-black cycle when the transport stops
    pub blackout_on_stop: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame_rate: DEFAULT_FRAME_RATE,
            commit_cadence: DEFAULT_COMMIT_CADENCE,
            default_effect: EffectId::Off.as_str(),
            blackout_on_stop: false,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.commit_cadence == 0 {
            return Err(ConfigError::ZeroCommitCadence);
        }
        Ok(())
    }

    /// Length of one transport cycle
    pub fn frame_period(&self) -> Duration {
        Duration::from_hz(u64::from(self.frame_rate.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (60, 1));
        assert_eq!(config.default_effect, "off");
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = EngineConfig {
            height: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension));

        let config = EngineConfig {
            commit_cadence: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCommitCadence));
    }
}
