//! Assembly of flat navigation rows into a menu forest.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{NavigationItem, NavigationNode};

/// Build the menu tree from flat rows.
///
/// Pass one indexes every row by id. Pass two walks the rows in their original
/// order and attaches each one either to its parent or to the root list, so
/// siblings keep the row order (the caller sorts by position). Rows whose
/// `parent_id` matches no row are dropped along with their descendants.
pub fn build_navigation_tree(items: Vec<NavigationItem>) -> Vec<NavigationNode> {
    let known: HashSet<u64> = items.iter().map(|item| item.id).collect();

    let mut roots: Vec<u64> = Vec::new();
    let mut children: HashMap<u64, Vec<u64>> = HashMap::new();
    let mut nodes: HashMap<u64, NavigationItem> = HashMap::with_capacity(items.len());

    for item in &items {
        match item.parent_id {
            Some(parent_id) if known.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(item.id);
            }
            Some(parent_id) => {
                tracing::debug!(
                    "Dropping navigation item {} ({}): parent {} does not exist",
                    item.id,
                    item.label,
                    parent_id
                );
            }
            None => roots.push(item.id),
        }
    }

    for item in items {
        nodes.insert(item.id, item);
    }

    let mut visited = HashSet::new();
    roots
        .into_iter()
        .filter_map(|id| assemble(id, &mut nodes, &children, &mut visited))
        .collect()
}

fn assemble(
    id: u64,
    nodes: &mut HashMap<u64, NavigationItem>,
    children: &HashMap<u64, Vec<u64>>,
    visited: &mut HashSet<u64>,
) -> Option<NavigationNode> {
    if !visited.insert(id) {
        return None;
    }
    let item = nodes.remove(&id)?;
    let kids = children
        .get(&id)
        .map(|ids| {
            ids.iter()
                .filter_map(|child| assemble(*child, nodes, children, visited))
                .collect()
        })
        .unwrap_or_default();

    Some(NavigationNode {
        item,
        children: kids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, parent_id: Option<u64>, position: i32) -> NavigationItem {
        NavigationItem {
            id,
            label: format!("item-{}", id),
            href: format!("/{}", id),
            parent_id,
            position,
            is_external: false,
            is_active: true,
        }
    }

    #[test]
    fn test_builds_two_levels() {
        let tree = build_navigation_tree(vec![
            item(1, None, 1),
            item(2, None, 2),
            item(3, Some(2), 1),
            item(4, Some(2), 2),
        ]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].item.id, 1);
        assert!(tree[0].children.is_empty());
        let ids: Vec<u64> = tree[1].children.iter().map(|n| n.item.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_orphans_are_dropped() {
        let tree = build_navigation_tree(vec![
            item(1, None, 1),
            item(2, Some(99), 1),
            item(3, Some(2), 1),
        ]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].item.id, 1);
        assert!(tree[0].children.is_empty());
        assert_eq!(tree.iter().map(NavigationNode::subtree_size).sum::<usize>(), 1);
    }

    #[test]
    fn test_child_listed_before_parent_is_still_attached() {
        let tree = build_navigation_tree(vec![
            item(5, Some(2), 1),
            item(2, Some(1), 1),
            item(1, None, 1),
        ]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children[0].item.id, 2);
        assert_eq!(tree[0].children[0].children[0].item.id, 5);
    }

    #[test]
    fn test_cycles_do_not_loop() {
        let tree = build_navigation_tree(vec![item(1, Some(2), 1), item(2, Some(1), 1)]);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(build_navigation_tree(Vec::new()).is_empty());
    }
}
