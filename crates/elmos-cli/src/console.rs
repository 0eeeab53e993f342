use std::io;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use elmos_term::application::ui::{
    destruct_terminal_for_panic, finish_loop, start_loop, CrosstermTerminal, TerminalControl,
};
use elmos_term::configuration::{Config, ConfigKey};
use elmos_term::domain::models::catalog::build_menu;
use elmos_term::domain::models::{Action, Event, MenuTree};
use elmos_term::domain::services::actions::ActionsService;
use elmos_term::domain::services::events::EventsService;
use elmos_term::domain::services::AppStateProps;
use elmos_term::infrastructure::executors::ProcessExecutor;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::task;

async fn start_ui(
    menu: MenuTree,
    program: &str,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut control = CrosstermTerminal {};
    control.acquire()?;

    let term_backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(term_backend)?;

    let app_state_props = AppStateProps {
        menu: Arc::new(menu),
    };
    let events = EventsService::new(rx, Config::tick_rate());

    let result = start_loop(
        &mut terminal,
        &mut control,
        app_state_props,
        Box::new(ProcessExecutor::new(program)),
        tx,
        events,
    )
    .await;

    finish_loop(&mut control, result)
}

/// Runs the console until the operator quits. The terminal is always given
/// back before this returns.
pub async fn run() -> Result<()> {
    let program = Config::get(ConfigKey::Executable);

    // An invalid menu is a startup failure, reported before the terminal is touched.
    let menu = build_menu(&program)?;
    log::info!("Starting console for {}", program);

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();

    let worker_executor = Box::new(ProcessExecutor::new(&program));
    background_futures.spawn(async move {
        ActionsService::start(worker_executor, event_tx, &mut action_rx).await
    });

    let ui_future = start_ui(menu, &program, action_tx, event_rx);

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(Err(err))) => Err(err),
            Some(Err(err)) => Err(err.into()),
            Some(Ok(Ok(()))) | None => Err(anyhow!("actions service stopped before the console")),
        },
        res = ui_future => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    // Background runs still in flight are abandoned, not awaited.
    background_futures.abort_all();

    result
}
