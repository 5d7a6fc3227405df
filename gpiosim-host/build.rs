//! Build script for gpiosim-host
//!
//! Validates blinky.toml at compile time so a bad embedded configuration
//! fails the build instead of the test run. The file is deserialized into
//! the same `BlinkConfig` type the binary uses, so unknown keys, bad
//! directions and out-of-range values are all caught here.

use std::fs;
use std::path::Path;

use gpiosim_core::BlinkConfig;

fn main() {
    validate_config();
}

/// Validate blinky.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=blinky.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config_path = Path::new("blinky.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: blinky.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  gpiosim embeds its test configuration from blinky.toml in the   ║\n\
            ║  gpiosim-host directory.                                         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read blinky.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: BlinkConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid blinky.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in blinky.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("[led] {}", e))
        );
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
