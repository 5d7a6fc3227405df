//! GPIO error taxonomy

use core::fmt;

/// Errors raised by register model operations
///
/// Both variants are programmer errors: the operation is abandoned before
/// any register state is modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin index outside 0..=31
    InvalidPinIndex(i32),
    /// Direction value other than 0 (input) or 1 (output)
    InvalidDirectionValue(i32),
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::InvalidPinIndex(pin) => {
                write!(f, "invalid pin index {} (expected 0..=31)", pin)
            }
            GpioError::InvalidDirectionValue(value) => {
                write!(f, "invalid direction value {} (expected 0 or 1)", value)
            }
        }
    }
}

impl core::error::Error for GpioError {}
