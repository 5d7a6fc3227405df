//! Board-agnostic core of the GPIO register simulator
//!
//! This crate contains everything that does not depend on where output
//! ends up:
//!
//! - The simulated port 0 output register and per-pin configuration
//! - Pin index, direction and level types with their validation rules
//! - The observer interface state changes are reported through
//! - The blink test sequence and its verification verdict
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod blink;
pub mod config;
pub mod gpio;
pub mod observer;

pub use blink::{BlinkReporter, BlinkTest, Outcome, Phase, Verification};
pub use config::{BlinkConfig, LedConfig, SequenceConfig};
pub use gpio::{Direction, GpioError, Level, PinEvent, PinIndex, PortPin, RegisterModel, PIN_COUNT};
pub use observer::{EventLog, NullObserver, PortEvent, PortObserver};
