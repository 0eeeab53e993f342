//! Core domain logic for the console.
//!
//! This module contains the menu model, the session state machine and the
//! services that feed it, independent of the terminal and of process spawning.

pub mod models;
pub mod services;
