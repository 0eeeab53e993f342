//! Application layer orchestrating the terminal interface.
//!
//! This module handles command line parsing, rendering and the main loop that
//! owns the terminal. It coordinates between the domain logic and the
//! process-backed executor.

pub mod cli;
pub mod render;
pub mod ui;
