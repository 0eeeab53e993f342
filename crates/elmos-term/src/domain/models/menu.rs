#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;

use std::collections::HashSet;

use super::ActionId;
use super::ConsoleError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPrompt {
    pub prompt: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuNode {
    pub label: String,
    pub description: String,
    pub action: Option<ActionId>,
    pub command_template: Option<String>,
    pub input: Option<InputPrompt>,
    pub interactive: bool,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn category(label: &str, description: &str, children: Vec<MenuNode>) -> MenuNode {
        return MenuNode {
            label: label.to_string(),
            description: description.to_string(),
            children,
            ..Default::default()
        };
    }

    pub fn action(label: &str, description: &str, action: ActionId, template: &str) -> MenuNode {
        return MenuNode {
            label: label.to_string(),
            description: description.to_string(),
            action: Some(action),
            command_template: Some(template.to_string()),
            ..Default::default()
        };
    }

    pub fn with_input(mut self, prompt: &str, placeholder: &str) -> MenuNode {
        self.input = Some(InputPrompt {
            prompt: prompt.to_string(),
            placeholder: placeholder.to_string(),
        });
        return self;
    }

    pub fn interactive(mut self) -> MenuNode {
        self.interactive = true;
        return self;
    }

    pub fn is_category(&self) -> bool {
        return !self.children.is_empty();
    }

    pub fn needs_input(&self) -> bool {
        return self.input.is_some();
    }

    /// The command template with its placeholder replaced by `value`.
    ///
    /// A `<required>` placeholder is always replaced. An `[optional]` one is
    /// dropped together with its leading space when `value` is empty.
    pub fn command_line(&self, value: &str) -> String {
        let template = match &self.command_template {
            Some(template) => template,
            None => return self.label.clone(),
        };

        let value = value.trim();
        for (open, close) in [('<', '>'), ('[', ']')] {
            let start = match template.find(open) {
                Some(start) => start,
                None => continue,
            };
            let end = match template[start..].find(close) {
                Some(offset) => start + offset + close.len_utf8(),
                None => continue,
            };

            if value.is_empty() && open == '[' {
                let head = template[..start].trim_end();
                return format!("{head}{}", &template[end..]);
            }

            return format!("{}{value}{}", &template[..start], &template[end..]);
        }

        return template.clone();
    }

    fn check(&self, path: &str) -> Result<(), ConsoleError> {
        let invalid = |reason: &str| -> Result<(), ConsoleError> {
            return Err(ConsoleError::InvalidMenuNode {
                path: path.to_string(),
                reason: reason.to_string(),
            });
        };

        if self.label.trim().is_empty() {
            return invalid("label is empty");
        }
        if self.is_category() {
            if self.action.is_some() {
                return invalid("a category cannot carry an action");
            }
            if self.needs_input() || self.interactive {
                return invalid("a category cannot take input or run interactively");
            }
        } else if self.action.is_none() {
            return invalid("a leaf must carry an action");
        }
        if self.needs_input() && self.interactive {
            return invalid("a node cannot both take input and run interactively");
        }

        return Ok(());
    }
}

/// The immutable catalog of menu entries browsed by the console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    /// Builds and validates a tree. Construction never yields an invalid tree.
    pub fn new(roots: Vec<MenuNode>) -> Result<MenuTree, ConsoleError> {
        let tree = MenuTree { roots };
        tree.validate()?;
        return Ok(tree);
    }

    pub fn roots(&self) -> &[MenuNode] {
        return &self.roots;
    }

    /// Walks every node and fails on the first one that breaks the
    /// category/leaf invariant, or on an action bound to two leaves.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.roots.is_empty() {
            return Err(ConsoleError::InvalidMenuNode {
                path: "/".to_string(),
                reason: "the menu has no entries".to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut pending: Vec<(String, &MenuNode)> = self
            .roots
            .iter()
            .rev()
            .map(|node| return (node.label.clone(), node))
            .collect();

        while let Some((path, node)) = pending.pop() {
            node.check(&path)?;
            if let Some(action) = node.action {
                if !seen.insert(action) {
                    return Err(ConsoleError::InvalidMenuNode {
                        path,
                        reason: format!("action {action} is bound more than once"),
                    });
                }
            }
            for child in node.children.iter().rev() {
                pending.push((format!("{path}/{}", child.label), child));
            }
        }

        tracing::debug!(actions = seen.len(), "menu validated");
        return Ok(());
    }

    pub fn lookup(&self, action: ActionId) -> Option<&MenuNode> {
        let mut pending: Vec<&MenuNode> = self.roots.iter().collect();
        while let Some(node) = pending.pop() {
            if node.action == Some(action) {
                return Some(node);
            }
            pending.extend(node.children.iter());
        }

        return None;
    }

    /// Resolves the sibling list reached by following `path` (child indices)
    /// from the root. An empty path is the root list.
    pub fn level(&self, path: &[usize]) -> Option<&[MenuNode]> {
        let mut nodes = self.roots.as_slice();
        for index in path {
            nodes = nodes.get(*index)?.children.as_slice();
        }

        return Some(nodes);
    }

    pub fn node(&self, path: &[usize], index: usize) -> Option<&MenuNode> {
        return self.level(path)?.get(index);
    }
}
