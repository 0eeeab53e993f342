mod action;
mod action_id;
pub mod catalog;
mod error;
mod event;
mod executor;
mod keymap;
mod log_line;
mod menu;
mod session;

pub use action::*;
pub use action_id::*;
pub use error::*;
pub use event::*;
pub use executor::*;
pub use keymap::*;
pub use log_line::*;
pub use menu::*;
pub use session::*;
