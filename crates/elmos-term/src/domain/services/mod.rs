pub mod actions;
mod app_state;
pub mod events;
mod input_capture;
mod log_viewport;
mod navigation;

pub use app_state::*;
pub use input_capture::*;
pub use log_viewport::*;
pub use navigation::*;
