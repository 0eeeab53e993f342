//! Error taxonomy for the console.
//!
//! Fatal errors (`ConsoleError`) abort the process after the terminal has been
//! released. Command errors travel inside completion events and end up as text
//! in the log. Input validation errors are swallowed by the input prompt.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("invalid menu node '{path}': {reason}")]
    InvalidMenuNode { path: String, reason: String },
    #[error("failed to restore the terminal after handoff: {0}")]
    TerminalHandoff(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("failed to start {program}: {reason}")]
    Spawn { program: String, reason: String },
    #[error("{}", exit_description(.code))]
    Execution { code: Option<i32> },
}

impl CommandError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandError::Spawn { .. } => None,
            CommandError::Execution { code } => *code,
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValidationError {
    #[error("a value is required")]
    Empty,
}
