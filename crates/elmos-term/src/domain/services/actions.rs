use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::Action;
use crate::domain::models::ActionExecutor;
use crate::domain::models::ActionExecutorBox;
use crate::domain::models::CommandCompletion;
use crate::domain::models::CommandRequest;
use crate::domain::models::Event;

async fn run_command(
    executor: &Arc<ActionExecutorBox>,
    request: CommandRequest,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let captured = executor.capture(&request.args).await;

    tracing::info!(
        action = %request.action,
        exit_code = ?captured.error.as_ref().and_then(|e| return e.exit_code()),
        failed = captured.error.is_some(),
        "background command finished"
    );

    event_tx.send(Event::CommandCompleted(CommandCompletion {
        action: request.action,
        error: captured.error,
        output: captured.output,
    }))?;

    Ok(())
}

/// Runs background actions off the render loop. Each request produces exactly
/// one `Event::CommandCompleted`.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        executor: ActionExecutorBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let executor_arc = Arc::new(executor);

        #[allow(unused_assignments)]
        let mut worker: JoinHandle<Result<()>> = tokio::spawn(async { Ok(()) });

        loop {
            let action = match rx.recv().await {
                Some(action) => action,
                None => return Ok(()),
            };

            match action {
                Action::RunCommand(request) => {
                    if !worker.is_finished() {
                        tracing::warn!(action = %request.action, "a command is already running");
                    }

                    tracing::info!(
                        program = %executor_arc.program(),
                        args = ?request.args,
                        "starting background command"
                    );

                    let worker_executor = executor_arc.clone();
                    let worker_event_tx = event_tx.clone();
                    worker = tokio::spawn(async move {
                        return run_command(&worker_executor, request, &worker_event_tx).await;
                    });
                }
            }
        }
    }
}
