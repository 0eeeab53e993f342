//! Configuration management for the console.
//!
//! Values resolve from compiled-in defaults, then the TOML config file, then
//! command line flags and their environment variables.

mod config;

pub use config::*;
