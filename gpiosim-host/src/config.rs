//! Embedded blink configuration
//!
//! `blinky.toml` is compiled into the binary; there is no runtime config
//! file. build.rs runs the same deserialization and checks at compile time,
//! so a file that builds also loads. If loading still fails the run is
//! aborted; the defaults are never substituted for a configured sequence.

use gpiosim_core::{BlinkConfig, GpioError};
use thiserror::Error;
use tracing::debug;

/// Configuration compiled into the binary (validated by build.rs)
pub const EMBEDDED_CONFIG: &str = include_str!("../blinky.toml");

/// Errors from loading a blink configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse blink configuration")]
    Parse(#[from] toml::de::Error),
    #[error("invalid LED pin in blink configuration")]
    Pin(#[from] GpioError),
}

/// Parse a TOML blink configuration
///
/// Missing keys take their default values; unknown keys are rejected. The
/// LED pin is range checked here so a bad file is reported as a config
/// error rather than midway through the test.
pub fn parse_config(text: &str) -> Result<BlinkConfig, ConfigError> {
    let config: BlinkConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load the embedded configuration
pub fn load_embedded() -> Result<BlinkConfig, ConfigError> {
    let config = parse_config(EMBEDDED_CONFIG)?;
    debug!(?config, "loaded embedded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpiosim_core::Direction;

    #[test]
    fn test_embedded_matches_defaults() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, BlinkConfig::default());
        assert_eq!(load_embedded().unwrap(), BlinkConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[sequence]\ntoggles = 9\n").unwrap();
        assert_eq!(config.sequence.toggles, 9);
        assert_eq!(config.sequence.expected_toggles, 10);
        assert_eq!(config.led.pin, 13);

        let config = parse_config("").unwrap();
        assert_eq!(config, BlinkConfig::default());
    }

    #[test]
    fn test_input_direction() {
        let config = parse_config("[led]\npin = 5\ndirection = 0\n").unwrap();
        assert_eq!(config.led.pin, 5);
        assert_eq!(config.led.direction, Direction::Input);
    }

    #[test]
    fn test_invalid_direction_rejected() {
        let err = parse_config("[led]\ndirection = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.contains("invalid direction value 2"), "{source}");
    }

    #[test]
    fn test_invalid_pin_rejected() {
        let err = parse_config("[led]\npin = 32\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Pin(GpioError::InvalidPinIndex(32))
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let text = "[sequence]\ntoggles = 9\nexpected_toggles = 10\ndelays = 5\n";
        let err = parse_config(text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        // The toml cause survives into the reported chain
        let report = format!("{:#}", anyhow::Error::from(err));
        assert!(report.starts_with("failed to parse blink configuration: "));
        assert!(report.contains("unknown field `delays`"), "{report}");
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = parse_config("[timing]\ndelay_ms = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
