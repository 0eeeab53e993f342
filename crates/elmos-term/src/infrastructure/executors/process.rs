#[cfg(test)]
#[path = "process_test.rs"]
mod tests;

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncRead;
use tokio::io::BufReader;
use tokio::process::Command;
use tokio::sync::mpsc;

use crate::domain::models::ActionExecutor;
use crate::domain::models::CapturedRun;
use crate::domain::models::CommandError;

/// Runs every argument vector against one external program.
pub struct ProcessExecutor {
    program: String,
}

impl ProcessExecutor {
    pub fn new(program: &str) -> ProcessExecutor {
        return ProcessExecutor {
            program: program.to_string(),
        };
    }

    fn spawn_error(&self, err: std::io::Error) -> CommandError {
        return CommandError::Spawn {
            program: self.program.clone(),
            reason: err.to_string(),
        };
    }
}

fn exit_error(status: std::process::ExitStatus) -> Option<CommandError> {
    if status.success() {
        return None;
    }

    return Some(CommandError::Execution {
        code: status.code(),
    });
}

/// Forwards `reader` line by line so that two streams interleave in the order
/// their lines arrive.
async fn pump<R: AsyncRead + Unpin>(reader: Option<R>, tx: mpsc::UnboundedSender<String>) {
    let reader = match reader {
        Some(reader) => reader,
        None => return,
    };

    let mut reader = BufReader::new(reader);
    let mut buf = vec![];
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                if tx.send(String::from_utf8_lossy(&buf).into_owned()).is_err() {
                    break;
                }
            }
            Err(err) => {
                tracing::warn!(error = ?err, "failed to read command output");
                break;
            }
        }
    }
}

#[async_trait]
impl ActionExecutor for ProcessExecutor {
    fn program(&self) -> String {
        return self.program.clone();
    }

    async fn capture(&self, args: &[String]) -> CapturedRun {
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            Err(err) => {
                tracing::error!(program = %self.program, error = ?err, "failed to spawn command");
                return CapturedRun {
                    output: "".to_string(),
                    error: Some(self.spawn_error(err)),
                };
            }
        };

        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let collect = async {
            let mut output = String::new();
            while let Some(chunk) = rx.recv().await {
                output.push_str(&chunk);
            }
            return output;
        };
        let (_, _, output) = tokio::join!(
            pump(child.stdout.take(), tx.clone()),
            pump(child.stderr.take(), tx),
            collect
        );

        let error = match child.wait().await {
            Ok(status) => exit_error(status),
            Err(err) => {
                tracing::error!(program = %self.program, error = ?err, "failed to wait for command");
                Some(CommandError::Execution { code: None })
            }
        };

        return CapturedRun { output, error };
    }

    async fn hand_off(&self, args: &[String]) -> Result<(), CommandError> {
        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|err| return self.spawn_error(err))?;

        return match exit_error(status) {
            Some(err) => Err(err),
            None => Ok(()),
        };
    }
}
