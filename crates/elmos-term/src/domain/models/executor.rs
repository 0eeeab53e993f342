use async_trait::async_trait;

use super::ActionId;
use super::CommandError;

/// Text captured from a background run, plus how it ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedRun {
    pub output: String,
    pub error: Option<CommandError>,
}

/// The single message delivered back to the loop per background run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCompletion {
    pub action: ActionId,
    pub error: Option<CommandError>,
    pub output: String,
}

/// Result of handing the terminal to a child and getting it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffReport {
    pub display: String,
    pub error: Option<CommandError>,
}

#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// The program every argument vector is passed to.
    fn program(&self) -> String;

    /// Runs with stdout and stderr merged into one captured buffer.
    async fn capture(&self, args: &[String]) -> CapturedRun;

    /// Runs with the terminal's stdin, stdout and stderr inherited.
    async fn hand_off(&self, args: &[String]) -> Result<(), CommandError>;
}

pub type ActionExecutorBox = Box<dyn ActionExecutor>;
