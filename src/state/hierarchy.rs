//! Expand/collapse state and the visible-row projection.
//!
//! Expansion flags live in a flat map keyed by row id, never inside the
//! task nodes themselves; the tree can be replaced wholesale on every data
//! update without touching this state. Collapsing a parent leaves
//! descendant flags untouched, so re-expanding restores the prior
//! descendant expansion.

use std::collections::HashMap;
use std::slice;

use crate::model::TaskNode;

/// Notification emitted when a row is toggled locally, for the external
/// state owner to persist or propagate. Local toggles are the only cause
/// of these events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowToggle {
    pub id: String,
    pub expanded: bool,
}

/// Owns the row-id to expanded mapping. Unknown ids read as collapsed.
#[derive(Debug, Clone, Default)]
pub struct HierarchyStore {
    expanded: HashMap<String, bool>,
}

impl HierarchyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one row's state, leaving every other entry (including
    /// descendants of a collapsing parent) untouched. Returns the event to
    /// forward to the external owner.
    pub fn toggle_row(&mut self, id: &str) -> RowToggle {
        let entry = self.expanded.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        RowToggle {
            id: id.to_string(),
            expanded: *entry,
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Replace the whole map with an authoritative external copy. This is a
    /// full replacement, not a merge.
    pub fn replace_all(&mut self, state: HashMap<String, bool>) {
        self.expanded = state;
    }

    /// Snapshot of the current map, in the shape `replace_all` accepts.
    pub fn snapshot(&self) -> HashMap<String, bool> {
        self.expanded.clone()
    }

    /// Depth-first pre-order walk of the rows whose ancestors are all
    /// expanded. Both the label panel and the timeline panel derive their
    /// row list from this one traversal; using separate walks would break
    /// row alignment between the panels.
    pub fn visible_rows<'a>(&self, roots: &'a [TaskNode]) -> VisibleRows<'a, '_> {
        VisibleRows {
            store: self,
            stack: vec![roots.iter()],
        }
    }
}

/// A row yielded by [`HierarchyStore::visible_rows`].
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub node: &'a TaskNode,
    pub depth: usize,
}

/// Lazy depth-first traversal over the expanded subtree.
pub struct VisibleRows<'a, 's> {
    store: &'s HierarchyStore,
    stack: Vec<slice::Iter<'a, TaskNode>>,
}

impl<'a> Iterator for VisibleRows<'a, '_> {
    type Item = VisibleRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(node) => {
                    let depth = self.stack.len() - 1;
                    if !node.children.is_empty() && self.store.is_expanded(&node.id) {
                        self.stack.push(node.children.iter());
                    }
                    return Some(VisibleRow { node, depth });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tree() -> Vec<TaskNode> {
        let day = |h| {
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        vec![
            TaskNode::bar("a", "A", day(0), day(4)).with_children(vec![
                TaskNode::bar("a1", "A1", day(0), day(2)),
                TaskNode::bar("a2", "A2", day(2), day(4)).with_children(vec![TaskNode::bar(
                    "a2x",
                    "A2X",
                    day(2),
                    day(3),
                )]),
            ]),
            TaskNode::bar("b", "B", day(4), day(8)),
        ]
    }

    fn visible_ids(store: &HierarchyStore, roots: &[TaskNode]) -> Vec<String> {
        store
            .visible_rows(roots)
            .map(|row| row.node.id.clone())
            .collect()
    }

    #[test]
    fn collapsed_tree_shows_roots_only() {
        let store = HierarchyStore::new();
        assert_eq!(visible_ids(&store, &tree()), ["a", "b"]);
    }

    #[test]
    fn toggle_twice_restores_the_prior_state() {
        let mut store = HierarchyStore::new();
        let first = store.toggle_row("a");
        assert!(first.expanded);
        let second = store.toggle_row("a");
        assert!(!second.expanded);
        assert!(!store.is_expanded("a"));
    }

    #[test]
    fn unknown_ids_read_as_collapsed() {
        let store = HierarchyStore::new();
        assert!(!store.is_expanded("never-seen"));
    }

    #[test]
    fn descendants_need_every_ancestor_expanded() {
        let roots = tree();
        let mut store = HierarchyStore::new();
        store.toggle_row("a2");
        // a2 is expanded but its parent is not, so nothing below `a` shows.
        assert_eq!(visible_ids(&store, &roots), ["a", "b"]);

        store.toggle_row("a");
        assert_eq!(visible_ids(&store, &roots), ["a", "a1", "a2", "a2x", "b"]);
    }

    #[test]
    fn collapse_is_sticky_for_descendant_state() {
        let roots = tree();
        let mut store = HierarchyStore::new();
        store.toggle_row("a");
        store.toggle_row("a2");
        let before = visible_ids(&store, &roots);

        // Collapsing the root hides the whole subtree without clearing the
        // descendant flags...
        store.toggle_row("a");
        assert_eq!(visible_ids(&store, &roots), ["a", "b"]);

        // ...so re-expanding restores exactly the previous visible set.
        store.toggle_row("a");
        assert_eq!(visible_ids(&store, &roots), before);
    }

    #[test]
    fn depths_follow_the_tree() {
        let roots = tree();
        let mut store = HierarchyStore::new();
        store.toggle_row("a");
        store.toggle_row("a2");
        let depths: Vec<usize> = store.visible_rows(&roots).map(|r| r.depth).collect();
        assert_eq!(depths, [0, 1, 1, 2, 0]);
    }

    #[test]
    fn replace_all_is_a_full_replacement() {
        let mut store = HierarchyStore::new();
        store.toggle_row("a");
        store.toggle_row("b");
        store.replace_all(HashMap::from([("a".to_string(), true)]));
        assert!(store.is_expanded("a"));
        assert!(!store.is_expanded("b"));
    }
}
