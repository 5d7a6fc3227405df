//! Pin index, direction and level types

use core::fmt;

use super::error::GpioError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of pins on the simulated port
pub const PIN_COUNT: usize = 32;

/// Validated pin index in `0..PIN_COUNT`
///
/// Displays in nRF port notation, e.g. `P0.13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinIndex(u8);

impl PinIndex {
    /// Validate a raw pin number
    pub fn new(pin: i32) -> Result<Self, GpioError> {
        if (0..PIN_COUNT as i32).contains(&pin) {
            Ok(Self(pin as u8))
        } else {
            Err(GpioError::InvalidPinIndex(pin))
        }
    }

    /// Pin number as `u8`
    pub fn get(self) -> u8 {
        self.0
    }

    /// Pin number as an array index
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Single-bit mask selecting this pin in a port register
    pub fn mask(self) -> u32 {
        1 << self.0
    }
}

impl TryFrom<i32> for PinIndex {
    type Error = GpioError;

    fn try_from(pin: i32) -> Result<Self, Self::Error> {
        Self::new(pin)
    }
}

impl fmt::Display for PinIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P0.{}", self.0)
    }
}

/// Pin direction, stored in bit 0 of the pin's configuration word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub enum Direction {
    /// DIR bit clear
    #[default]
    Input,
    /// DIR bit set
    Output,
}

impl Direction {
    /// Bit mask of the DIR field in a configuration word
    pub const DIR_MASK: u32 = 1 << 0;

    /// Decode the DIR bit of a configuration word
    pub fn from_cnf(cnf: u32) -> Self {
        if cnf & Self::DIR_MASK != 0 {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    /// Apply this direction to a configuration word, leaving other bits as-is
    pub fn apply(self, cnf: u32) -> u32 {
        match self {
            Direction::Output => cnf | Self::DIR_MASK,
            Direction::Input => cnf & !Self::DIR_MASK,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = GpioError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Input),
            1 => Ok(Direction::Output),
            other => Err(GpioError::InvalidDirectionValue(other)),
        }
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Input => 0,
            Direction::Output => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("INPUT"),
            Direction::Output => f.write_str("OUTPUT"),
        }
    }
}

/// Logic level of a pin's output bit
///
/// The board's LED is wired active-low, so [`Level::led_label`] reports
/// `Low` as "LED ON". The label never changes behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Bit clear (LED on)
    #[default]
    Low,
    /// Bit set (LED off)
    High,
}

/// Events that drive the per-pin level state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinEvent {
    /// Drive the pin to the given value (true = high)
    Set(bool),
    /// Invert the current level
    Toggle,
}

impl Level {
    /// Level for a register bit
    pub fn from_bit(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Register bit value, 0 or 1
    pub fn bit(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    /// True for `High`
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// The opposite level
    pub fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// Process an event and return the next level
    pub fn transition(self, event: PinEvent) -> Self {
        match event {
            PinEvent::Set(high) => Level::from_bit(high),
            PinEvent::Toggle => self.toggled(),
        }
    }

    /// Active-low LED annotation for this level
    pub fn led_label(self) -> &'static str {
        match self {
            Level::Low => "LED ON",
            Level::High => "LED OFF",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "LOW ({})", self.led_label()),
            Level::High => write!(f, "HIGH ({})", self.led_label()),
        }
    }
}
