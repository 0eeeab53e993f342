use tui_textarea::Input;

use super::CommandCompletion;
use super::HandoffReport;

#[derive(Debug)]
pub enum Event {
    CommandCompleted(CommandCompletion),
    HandoffReturned(HandoffReport),
    KeyboardInput(Input),
    KeyboardPaste(String),
    UIResize(u16, u16),
    UITick,
}
