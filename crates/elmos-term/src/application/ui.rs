#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::event::EventStream;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::render::render;
use crate::domain::models::Action;
use crate::domain::models::ActionExecutorBox;
use crate::domain::models::CommandRequest;
use crate::domain::models::ConsoleError;
use crate::domain::models::Event;
use crate::domain::models::HandoffReport;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::Effect;

/// Puts the terminal into raw mode on the alternate screen with mouse capture
/// and bracketed paste.
pub fn acquire_terminal() -> Result<()> {
    enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    return Ok(());
}

/// Undoes everything `acquire_terminal` did.
pub fn release_terminal() -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    )?;

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    );
}

/// Everything the loop needs from the real terminal besides drawing.
pub trait TerminalControl {
    fn acquire(&mut self) -> Result<()>;

    fn release(&mut self) -> Result<()>;

    /// Best-effort release that never fails.
    fn teardown(&mut self);

    /// Key, mouse and paste input. None when there is no terminal to read.
    fn input(&mut self) -> Option<EventStream>;
}

/// The process's own terminal, driven through crossterm.
pub struct CrosstermTerminal {}

impl TerminalControl for CrosstermTerminal {
    fn acquire(&mut self) -> Result<()> {
        return acquire_terminal();
    }

    fn release(&mut self) -> Result<()> {
        return release_terminal();
    }

    fn teardown(&mut self) {
        destruct_terminal_for_panic();
    }

    fn input(&mut self) -> Option<EventStream> {
        return Some(EventStream::new());
    }
}

async fn hand_off<B: Backend>(
    terminal: &mut Terminal<B>,
    control: &mut dyn TerminalControl,
    executor: &ActionExecutorBox,
    request: &CommandRequest,
) -> Result<HandoffReport> {
    tracing::info!(
        program = %executor.program(),
        args = ?request.args,
        "handing terminal to child"
    );

    if let Err(err) = control.release() {
        tracing::error!(error = ?err, "failed to release terminal");
        control.teardown();
        return Err(ConsoleError::TerminalHandoff(err.to_string()).into());
    }

    let res = executor.hand_off(&request.args).await;

    if let Err(err) = control.acquire() {
        tracing::error!(error = ?err, "failed to restore terminal");
        control.teardown();
        return Err(ConsoleError::TerminalHandoff(err.to_string()).into());
    }
    terminal.clear()?;

    tracing::info!(
        action = %request.action,
        exit_code = ?res.as_ref().err().and_then(|e| return e.exit_code()),
        failed = res.is_err(),
        "terminal returned from child"
    );

    return Ok(HandoffReport {
        display: request.display.clone(),
        error: res.err(),
    });
}

/// Gives the terminal back once `start_loop` is done. A loop error is kept
/// over any failure to release, and the terminal is torn down best-effort.
pub fn finish_loop(control: &mut dyn TerminalControl, result: Result<()>) -> Result<()> {
    if result.is_err() {
        control.teardown();
        return result;
    }

    control.release()?;
    return result;
}

/// Runs the console until the operator quits. The caller acquires `control`
/// before and hands it to `finish_loop` after.
///
/// Background runs go out over `tx`; interactive ones are run here with the
/// terminal handed to the child, since nothing else may draw meanwhile.
pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    control: &mut dyn TerminalControl,
    app_state_props: AppStateProps,
    handoff_executor: ActionExecutorBox,
    tx: mpsc::UnboundedSender<Action>,
    mut events: EventsService,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    if let Some(stream) = control.input() {
        events.resume(stream);
    }

    loop {
        terminal.draw(|frame| render(frame, &mut app_state))?;

        let event = events.next().await?;
        match app_state.handle_event(event) {
            Effect::None => {}
            Effect::Spawn(request) => {
                tx.send(Action::RunCommand(request))?;
            }
            Effect::HandOff(request) => {
                events.pause();
                let report = hand_off(terminal, control, &handoff_executor, &request).await?;
                if let Some(stream) = control.input() {
                    events.resume(stream);
                }
                app_state.handle_event(Event::HandoffReturned(report));
            }
            Effect::Quit => break,
        }
    }

    return Ok(());
}
