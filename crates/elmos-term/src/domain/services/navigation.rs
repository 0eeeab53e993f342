#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;

use std::sync::Arc;

use crate::domain::models::MenuNode;
use crate::domain::models::MenuTree;

/// One browsed menu: which sibling list, and where the cursor sits in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuLevel {
    pub path: Vec<usize>,
    pub cursor: usize,
}

/// What `enter` found under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Descended,
    Leaf(MenuNode),
    Nothing,
}

/// Stack-based walker over a `MenuTree`.
///
/// `current` is the displayed menu; `stack` holds the levels above it, so the
/// stack is empty exactly when the root menu is displayed.
pub struct NavigationController {
    tree: Arc<MenuTree>,
    stack: Vec<MenuLevel>,
    current: MenuLevel,
}

impl NavigationController {
    pub fn new(tree: Arc<MenuTree>) -> NavigationController {
        return NavigationController {
            tree,
            stack: vec![],
            current: MenuLevel::default(),
        };
    }

    pub fn items(&self) -> &[MenuNode] {
        return self.tree.level(&self.current.path).unwrap_or_default();
    }

    pub fn cursor(&self) -> usize {
        return self.current.cursor;
    }

    pub fn current_level(&self) -> &MenuLevel {
        return &self.current;
    }

    pub fn depth(&self) -> usize {
        return self.stack.len();
    }

    pub fn is_at_root(&self) -> bool {
        return self.stack.is_empty();
    }

    pub fn selected(&self) -> Option<&MenuNode> {
        return self.items().get(self.current.cursor);
    }

    /// Label of the category whose children are displayed, if any.
    pub fn title(&self) -> Option<&str> {
        let (index, parent) = self.current.path.split_last()?;
        return self
            .tree
            .node(parent, *index)
            .map(|node| return node.label.as_str());
    }

    /// Moves the cursor by `delta`, clamped to the displayed list.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.items().len();
        if len == 0 {
            return;
        }

        let max = (len - 1) as isize;
        let target = (self.current.cursor as isize).saturating_add(delta).clamp(0, max);
        self.current.cursor = target as usize;
    }

    /// Descends into a category, or reports the leaf under the cursor.
    pub fn enter(&mut self) -> Selection {
        let node = match self.selected() {
            Some(node) => node,
            None => return Selection::Nothing,
        };

        if !node.is_category() {
            return Selection::Leaf(node.clone());
        }

        let mut path = self.current.path.clone();
        path.push(self.current.cursor);
        let parent = std::mem::replace(&mut self.current, MenuLevel { path, cursor: 0 });
        self.stack.push(parent);

        return Selection::Descended;
    }

    /// Restores the level saved by the matching `enter`. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if let Some(parent) = self.stack.pop() {
            self.current = parent;
            return true;
        }

        return false;
    }
}
