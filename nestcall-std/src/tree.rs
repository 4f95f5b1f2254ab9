//! Namespace tree storage.
//!
//! Each node keeps its own records in priority buckets, separate from its child
//! namespaces, so no segment name can collide with the bookkeeping.

use nestcall_core::{Action, ActionId, Excludes, Priority};
use std::{collections::BTreeMap, fmt, sync::Arc};

/// An immutable callback record.
pub struct ActionRecord {
    id: ActionId,
    priority: Priority,
    excludes: Excludes,
    action: Arc<dyn Action>,
}

impl ActionRecord {
    /// Create a record.
    pub fn new(
        id: ActionId,
        priority: Priority,
        excludes: Excludes,
        action: Arc<dyn Action>,
    ) -> Self {
        Self {
            id,
            priority,
            excludes,
            action,
        }
    }

    /// Record identity.
    pub fn id(&self) -> ActionId {
        self.id
    }

    /// Registered priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Scope paths this record is skipped under.
    pub fn excludes(&self) -> &Excludes {
        &self.excludes
    }

    /// Whether any of the requested scope paths is excluded for this record.
    pub fn is_excluded_from<'a, I>(&self, requested: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.excludes.matches_any(requested)
    }

    /// The registered action.
    pub fn action(&self) -> &dyn Action {
        &*self.action
    }
}

impl fmt::Debug for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRecord")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("excludes", &self.excludes)
            .finish_non_exhaustive()
    }
}

/// A node in the namespace tree.
#[derive(Debug, Default)]
pub struct NamespaceNode {
    actions: BTreeMap<Priority, Vec<Arc<ActionRecord>>>,
    children: BTreeMap<String, NamespaceNode>,
}

impl NamespaceNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the child for `segment`, creating it if absent.
    pub fn child_or_insert(&mut self, segment: &str) -> &mut NamespaceNode {
        self.children.entry(segment.to_owned()).or_default()
    }

    /// Get the child for `segment`.
    pub fn child(&self, segment: &str) -> Option<&NamespaceNode> {
        self.children.get(segment)
    }

    /// Iterate over child segments and nodes in segment order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &NamespaceNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Walk down a sequence of segments.
    pub fn descend<'a, I>(&self, segments: I) -> Option<&NamespaceNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = self;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Append a record to its priority bucket, after any existing records of equal priority.
    pub fn push(&mut self, record: ActionRecord) {
        self.actions
            .entry(record.priority)
            .or_default()
            .push(Arc::new(record));
    }

    /// Records registered at exactly `priority`, in registration order.
    pub fn bucket(&self, priority: Priority) -> &[Arc<ActionRecord>] {
        self.actions.get(&priority).map(Vec::as_slice).unwrap_or_default()
    }

    /// Priorities that have at least one record here, highest first.
    pub fn priorities(&self) -> impl Iterator<Item = Priority> + '_ {
        self.actions.keys().rev().copied()
    }

    /// This node's own records, highest priority first, registration order within a bucket.
    pub fn records(&self) -> impl Iterator<Item = &Arc<ActionRecord>> {
        self.actions.values().rev().flatten()
    }

    /// Whether a record with `id` is registered directly at this node.
    pub fn contains(&self, id: ActionId) -> bool {
        self.records().any(|r| r.id == id)
    }

    /// Visit this node's records and every descendant's, depth-first.
    pub fn for_each_in_subtree<'a>(&'a self, visit: &mut impl FnMut(&'a Arc<ActionRecord>)) {
        for record in self.records() {
            visit(record);
        }
        self.for_each_below(visit);
    }

    /// Visit every descendant's records, depth-first, skipping this node's own.
    pub fn for_each_below<'a>(&'a self, visit: &mut impl FnMut(&'a Arc<ActionRecord>)) {
        for child in self.children.values() {
            child.for_each_in_subtree(visit);
        }
    }

    /// Number of records in this subtree.
    pub fn subtree_len(&self) -> usize {
        let own: usize = self.actions.values().map(Vec::len).sum();
        own + self.children.values().map(NamespaceNode::subtree_len).sum::<usize>()
    }

    /// Whether this node has neither records nor children.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.children.is_empty()
    }
}
