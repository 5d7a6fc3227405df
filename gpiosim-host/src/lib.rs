//! Host-side runner for the gpiosim blink test
//!
//! Loads the blink configuration embedded at build time and renders the
//! register model's state changes as console text. The `gpiosim` binary
//! wires these together; they live in a library so tests can drive them
//! against an in-memory writer.

pub mod config;
pub mod console;

pub use config::{load_embedded, parse_config, ConfigError, EMBEDDED_CONFIG};
pub use console::ConsoleReporter;
