use tui_textarea::Input;
use tui_textarea::Key;

/// What a key press means while browsing. Input capture bypasses this map
/// and feeds keys to the text field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Up,
    Down,
    Select,
    Back,
    Quit,
    ClearLog,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}

impl KeyCommand {
    pub fn from_input(input: &Input) -> Option<KeyCommand> {
        return match input {
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => Some(KeyCommand::Quit),
            Input {
                key: Key::Char('u'),
                ctrl: true,
                ..
            } => Some(KeyCommand::PageUp),
            Input {
                key: Key::Char('d'),
                ctrl: true,
                ..
            } => Some(KeyCommand::PageDown),
            Input { ctrl: true, .. } => None,
            Input {
                key: Key::Up | Key::Char('k'),
                ..
            } => Some(KeyCommand::Up),
            Input {
                key: Key::Down | Key::Char('j'),
                ..
            } => Some(KeyCommand::Down),
            Input {
                key: Key::Enter, ..
            } => Some(KeyCommand::Select),
            Input {
                key: Key::Esc | Key::Backspace,
                ..
            } => Some(KeyCommand::Back),
            Input {
                key: Key::Char('q'),
                ..
            } => Some(KeyCommand::Quit),
            Input {
                key: Key::Char('c'),
                ..
            } => Some(KeyCommand::ClearLog),
            Input {
                key: Key::Char('[') | Key::PageUp,
                ..
            } => Some(KeyCommand::PageUp),
            Input {
                key: Key::Char(']') | Key::PageDown,
                ..
            } => Some(KeyCommand::PageDown),
            Input {
                key: Key::Char('{') | Key::MouseScrollUp,
                ..
            } => Some(KeyCommand::ScrollUp),
            Input {
                key: Key::Char('}') | Key::MouseScrollDown,
                ..
            } => Some(KeyCommand::ScrollDown),
            _ => None,
        };
    }
}
