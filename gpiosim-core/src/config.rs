//! Blink test configuration
//!
//! The defaults reproduce the reference sequence: LED on P0.13 configured
//! as output, ten toggles with a simulated 1000 ms delay, ten expected.

use crate::gpio::{Direction, GpioError, PinIndex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin the reference board's LED is wired to
pub const DEFAULT_LED_PIN: i32 = 13;
/// Toggles performed by the reference sequence (5 complete blinks)
pub const DEFAULT_TOGGLES: u32 = 10;
/// Delay label printed between toggles
pub const DEFAULT_DELAY_MS: u32 = 1000;

/// Complete blink test configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BlinkConfig {
    pub led: LedConfig,
    pub sequence: SequenceConfig,
}

/// LED pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LedConfig {
    /// Raw pin number; validated by the register model when used
    pub pin: i32,
    /// Direction written during the configuration phase (0 or 1 in TOML)
    pub direction: Direction,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_LED_PIN,
            direction: Direction::Output,
        }
    }
}

/// Toggle sequence and verification parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SequenceConfig {
    /// Number of toggles to perform
    pub toggles: u32,
    /// Simulated delay after each toggle; never actually waited
    pub delay_ms: u32,
    /// Toggle count the verification phase expects
    pub expected_toggles: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            toggles: DEFAULT_TOGGLES,
            delay_ms: DEFAULT_DELAY_MS,
            expected_toggles: DEFAULT_TOGGLES as u64,
        }
    }
}

impl BlinkConfig {
    /// Same configuration with a different number of toggles
    ///
    /// The expected count is left unchanged, so anything other than the
    /// expected number makes verification fail.
    pub fn with_toggles(mut self, toggles: u32) -> Self {
        self.sequence.toggles = toggles;
        self
    }

    /// Check the values serde cannot check on its own
    ///
    /// Currently only the LED pin range; the direction is already
    /// validated while deserializing.
    pub fn validate(&self) -> Result<(), GpioError> {
        PinIndex::new(self.led.pin)?;
        Ok(())
    }
}
