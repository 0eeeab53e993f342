use super::ActionId;
use super::MenuNode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
pub enum SessionMode {
    #[default]
    Browsing,
    InputCapture,
    Running,
    InteractiveHandoff,
    Quitting,
}

impl SessionMode {
    /// Whether an action (background or handoff) is outstanding.
    pub fn is_busy(self) -> bool {
        return self == SessionMode::Running || self == SessionMode::InteractiveHandoff;
    }
}

/// The leaf waiting for its single text parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub action: ActionId,
    pub label: String,
    pub prompt: String,
    pub placeholder: String,
    pub node: MenuNode,
}

impl PendingAction {
    /// Returns None for nodes that take no input.
    pub fn from_node(node: &MenuNode) -> Option<PendingAction> {
        let action = node.action?;
        let input = node.input.as_ref()?;

        return Some(PendingAction {
            action,
            label: node.label.clone(),
            prompt: input.prompt.clone(),
            placeholder: input.placeholder.clone(),
            node: node.clone(),
        });
    }
}
