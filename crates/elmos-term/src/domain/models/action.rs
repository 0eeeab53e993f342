use super::ActionId;

/// A resolved invocation: what to run and how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub action: ActionId,
    pub args: Vec<String>,
    pub display: String,
}

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(CommandRequest),
}
