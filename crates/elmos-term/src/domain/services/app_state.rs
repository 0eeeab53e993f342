use std::sync::Arc;

use tui_textarea::Input;
use tui_textarea::Key;

use super::InputCapture;
use super::LogViewport;
use super::NavigationController;
use super::Selection;
use crate::domain::models::CommandCompletion;
use crate::domain::models::CommandRequest;
use crate::domain::models::Event;
use crate::domain::models::HandoffReport;
use crate::domain::models::KeyCommand;
use crate::domain::models::LogKind;
use crate::domain::models::LogLine;
use crate::domain::models::MenuNode;
use crate::domain::models::MenuTree;
use crate::domain::models::PendingAction;
use crate::domain::models::SessionMode;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the loop must do after the state consumed an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Spawn(CommandRequest),
    HandOff(CommandRequest),
    Quit,
}

pub struct AppStateProps {
    pub menu: Arc<MenuTree>,
}

pub struct AppState {
    pub input: Option<InputCapture>,
    pub log: LogViewport,
    pub mode: SessionMode,
    pub navigation: NavigationController,
    pub running: Option<CommandRequest>,
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            input: None,
            log: LogViewport::default(),
            mode: SessionMode::Browsing,
            navigation: NavigationController::new(props.menu),
            running: None,
            spinner_frame: 0,
        };
    }

    pub fn spinner(&self) -> &'static str {
        return SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
    }

    pub fn handle_event(&mut self, event: Event) -> Effect {
        match event {
            Event::CommandCompleted(completion) => {
                self.handle_completion(completion);
            }
            Event::HandoffReturned(report) => {
                self.handle_handoff_returned(report);
            }
            Event::KeyboardInput(input) => {
                if self.mode == SessionMode::InputCapture {
                    return self.handle_input_key(input);
                }
                return self.handle_key(input);
            }
            Event::KeyboardPaste(text) => {
                if let Some(capture) = self.input.as_mut() {
                    capture.paste(&text);
                }
            }
            Event::UIResize(..) => {}
            Event::UITick => {
                if self.mode.is_busy() {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
        }

        return Effect::None;
    }

    fn handle_key(&mut self, input: Input) -> Effect {
        let command = match KeyCommand::from_input(&input) {
            Some(command) => command,
            None => return Effect::None,
        };

        // Only quitting and scrolling stay live while an action is outstanding.
        let busy = self.mode != SessionMode::Browsing;
        match command {
            KeyCommand::Quit => return self.quit(),
            KeyCommand::ScrollUp => self.log.scroll_up(1),
            KeyCommand::ScrollDown => self.log.scroll_down(1),
            KeyCommand::PageUp => self.log.page_up(),
            KeyCommand::PageDown => self.log.page_down(),
            _ if busy => {}
            KeyCommand::Up => self.navigation.move_cursor(-1),
            KeyCommand::Down => self.navigation.move_cursor(1),
            KeyCommand::ClearLog => self.log.clear(),
            KeyCommand::Back => {
                self.navigation.back();
            }
            KeyCommand::Select => return self.enter(),
        }

        return Effect::None;
    }

    /// Pops one level, or quits at the root. The outstanding background run,
    /// if any, is neither awaited nor cancelled.
    fn quit(&mut self) -> Effect {
        if self.navigation.back() {
            return Effect::None;
        }

        tracing::debug!(running = self.running.is_some(), "quitting");
        self.mode = SessionMode::Quitting;
        return Effect::Quit;
    }

    fn enter(&mut self) -> Effect {
        if self.mode != SessionMode::Browsing {
            return Effect::None;
        }

        let node = match self.navigation.enter() {
            Selection::Leaf(node) => node,
            Selection::Descended | Selection::Nothing => return Effect::None,
        };

        if let Some(pending) = PendingAction::from_node(&node) {
            self.input = Some(InputCapture::new(pending));
            self.mode = SessionMode::InputCapture;
            return Effect::None;
        }

        let request = match build_request(&node, "") {
            Some(request) => request,
            None => return Effect::None,
        };
        if node.interactive {
            return self.start_handoff(request);
        }

        return self.start_run(request);
    }

    fn handle_input_key(&mut self, input: Input) -> Effect {
        let capture = match self.input.as_mut() {
            Some(capture) => capture,
            None => {
                self.mode = SessionMode::Browsing;
                return Effect::None;
            }
        };

        match input {
            Input { key: Key::Esc, .. }
            | Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => {
                self.input = None;
                self.mode = SessionMode::Browsing;
            }
            Input {
                key: Key::Enter, ..
            } => {
                let value = match capture.confirm() {
                    Ok(value) => value,
                    Err(_) => return Effect::None,
                };

                let pending = capture.pending().clone();
                self.input = None;
                let request = match build_request(&pending.node, &value) {
                    Some(request) => request,
                    None => {
                        self.mode = SessionMode::Browsing;
                        return Effect::None;
                    }
                };

                if pending.action.requires_terminal(&value) {
                    return self.start_handoff(request);
                }
                return self.start_run(request);
            }
            input => capture.handle_input(input),
        }

        return Effect::None;
    }

    fn start_run(&mut self, request: CommandRequest) -> Effect {
        tracing::debug!(action = %request.action, args = ?request.args, "running in background");
        self.mode = SessionMode::Running;
        self.spinner_frame = 0;
        self.running = Some(request.clone());

        return Effect::Spawn(request);
    }

    fn start_handoff(&mut self, request: CommandRequest) -> Effect {
        tracing::debug!(action = %request.action, args = ?request.args, "handing off terminal");
        self.log
            .append(LogLine::new(LogKind::Command, &format!("▶ {}", request.display)));
        self.mode = SessionMode::InteractiveHandoff;
        self.running = Some(request.clone());

        return Effect::HandOff(request);
    }

    fn handle_completion(&mut self, completion: CommandCompletion) {
        tracing::debug!(
            action = %completion.action,
            bytes = completion.output.len(),
            exit_code = ?completion.error.as_ref().and_then(|e| return e.exit_code()),
            "command completed"
        );

        self.log.append_output(&completion.output);
        match completion.error {
            Some(err) => self.log.append(LogLine::failure(&err.to_string())),
            None => self.log.append(LogLine::success()),
        }

        if self.mode == SessionMode::Running {
            self.mode = SessionMode::Browsing;
        }
        self.running = None;
    }

    fn handle_handoff_returned(&mut self, report: HandoffReport) {
        let status = match &report.error {
            Some(err) => err.to_string(),
            None => "ok".to_string(),
        };
        self.log.append(LogLine::new(
            LogKind::Info,
            &format!("◀ returned from {} ({status})", report.display),
        ));

        if self.mode == SessionMode::InteractiveHandoff {
            self.mode = SessionMode::Browsing;
        }
        self.running = None;
    }
}

fn build_request(node: &MenuNode, value: &str) -> Option<CommandRequest> {
    let action = node.action?;
    return Some(CommandRequest {
        action,
        args: action.invoke(value),
        display: node.command_line(value),
    });
}
