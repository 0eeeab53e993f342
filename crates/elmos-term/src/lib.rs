//! Terminal menu console for the elmos build tool.
//!
//! This crate renders a hierarchical menu of build, emulation and maintenance
//! actions, runs the chosen action through an external executor, and shows the
//! captured output in a scrollable log. Actions that need the terminal (full
//! screen configurators, emulators, debuggers) temporarily own it instead.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{
    acquire_terminal, destruct_terminal_for_panic, finish_loop, release_terminal, start_loop,
    CrosstermTerminal, TerminalControl,
};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, ActionExecutor, ActionId, Event, MenuNode, MenuTree};
pub use domain::services::AppStateProps;
pub use infrastructure::executors::ProcessExecutor;
