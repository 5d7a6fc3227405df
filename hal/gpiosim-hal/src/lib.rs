//! gpiosim Hardware Abstraction Layer
//!
//! This crate defines the GPIO traits that pin handles implement. The
//! simulated register model in `gpiosim-core` is one implementation; a
//! chip-specific HAL could provide another, so blink logic written against
//! these traits runs unchanged on either.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (gpiosim-host, tests)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gpiosim-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gpiosim-core (simulated OUT register)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::ConfigurablePin`] - Direction control

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{ConfigurablePin, InputPin, IoPin, OutputPin};
