//! Infrastructure layer providing external integrations.
//!
//! This module contains the process-backed executor that runs the external
//! build actions on behalf of the console.

pub mod executors;
