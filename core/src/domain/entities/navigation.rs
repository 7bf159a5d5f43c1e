//! Navigation menu entries and the assembled menu tree.

use serde::{Deserialize, Serialize};

/// One row of the `navigation` table. `parent_id` refers to another row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: u64,
    pub label: String,
    pub href: String,
    pub parent_id: Option<u64>,
    pub position: i32,
    pub is_external: bool,
    pub is_active: bool,
}

/// A menu entry with its nested children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    #[serde(flatten)]
    pub item: NavigationItem,
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    pub fn leaf(item: NavigationItem) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(NavigationNode::subtree_size)
            .sum::<usize>()
    }
}
