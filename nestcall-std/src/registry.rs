//! Registry for namespaced actions.
//!
//! The registry validates registration paths and inserts callback records into
//! the namespace tree. The global scope is an ordinary child of the root, named
//! by the configured global key.

use crate::tree::{ActionRecord, NamespaceNode};
use nestcall_core::{
    Action, ActionId, ConfigError, DispatcherConfig, NamespacePath, RegisterOptions,
    RegistrationError,
};
use std::sync::Arc;

/// Namespace tree plus the reserved keys it was configured with.
///
/// # Example
/// ```
/// use nestcall_core::RegisterOptions;
/// use nestcall_std::registry::Registry;
///
/// let mut registry = Registry::new();
/// let id = registry
///     .register("foo.bar", || {}, RegisterOptions::new().with_priority(5))
///     .unwrap();
///
/// let node = registry.node("foo.bar").unwrap();
/// assert!(node.contains(id));
/// assert_eq!(node.bucket(5).len(), 1);
/// ```
#[derive(Debug)]
pub struct Registry {
    root: NamespaceNode,
    config: DispatcherConfig,
    next_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry with the default keys.
    pub fn new() -> Self {
        Self {
            root: NamespaceNode::new(),
            config: DispatcherConfig::default(),
            next_id: 0,
        }
    }

    /// Create an empty registry with custom keys.
    pub fn with_config(config: DispatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            root: NamespaceNode::new(),
            config,
            next_id: 0,
        })
    }

    /// The name of the global scope's node.
    pub fn global_key(&self) -> &str {
        self.config.global()
    }

    /// The reserved entry key.
    pub fn entry_key(&self) -> &str {
        self.config.entry()
    }

    /// Register `action` under the dot-delimited `path`.
    ///
    /// Intermediate namespaces are created as needed. Nothing is inserted if the
    /// path is rejected.
    pub fn register<A: Action>(
        &mut self,
        path: &str,
        action: A,
        options: RegisterOptions,
    ) -> Result<ActionId, RegistrationError> {
        let path = NamespacePath::parse(path)?;
        path.check_reserved(self.config.entry())?;
        Ok(self.insert(&path, Arc::new(action), options))
    }

    /// Register `action` in the global scope.
    pub fn register_global<A: Action>(
        &mut self,
        action: A,
        options: RegisterOptions,
    ) -> Result<ActionId, RegistrationError> {
        let key = self.config.global().to_owned();
        self.register(&key, action, options)
    }

    fn insert(
        &mut self,
        path: &NamespacePath,
        action: Arc<dyn Action>,
        options: RegisterOptions,
    ) -> ActionId {
        let id = ActionId::from_raw(self.next_id);
        self.next_id += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %path,
            %id,
            priority = options.priority,
            excludes = options.excludes.len(),
            "Registering action"
        );

        let node = path
            .segments()
            .fold(&mut self.root, |node, segment| node.child_or_insert(segment));
        node.push(ActionRecord::new(
            id,
            options.priority,
            options.excludes,
            action,
        ));
        id
    }

    /// Drop every registration. Ids keep counting up.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(discarded = self.len(), "Resetting registry");

        self.root = NamespaceNode::new();
    }

    /// The root node.
    pub fn root(&self) -> &NamespaceNode {
        &self.root
    }

    /// The node registered at `path`, if any.
    pub fn node(&self, path: &str) -> Option<&NamespaceNode> {
        let path = NamespacePath::parse(path).ok()?;
        self.root.descend(path.segments())
    }

    /// The global scope's node, if anything was registered there.
    pub fn global_node(&self) -> Option<&NamespaceNode> {
        self.root.child(self.config.global())
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.root.subtree_len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_creates_intermediate_nodes() {
        let mut registry = Registry::new();
        let id = registry
            .register("foo.bar", || {}, RegisterOptions::new())
            .unwrap();

        let foo = registry.node("foo").unwrap();
        assert!(foo.records().next().is_none());
        assert!(foo.child("bar").unwrap().contains(id));
    }

    #[test]
    fn test_register_global_uses_global_key() {
        let mut registry =
            Registry::with_config(DispatcherConfig::new().global_key("**")).unwrap();
        let id = registry.register_global(|| {}, RegisterOptions::new()).unwrap();

        assert!(registry.node("**").unwrap().contains(id));
        assert!(registry.global_node().unwrap().contains(id));
    }

    #[test]
    fn test_priority_buckets() {
        let mut registry = Registry::new();
        let low = registry
            .register_global(|| {}, RegisterOptions::new().with_priority(99))
            .unwrap();
        let high = registry
            .register_global(|| {}, RegisterOptions::new().with_priority(100))
            .unwrap();

        let global = registry.global_node().unwrap();
        assert_eq!(global.bucket(99).len(), 1);
        assert_eq!(global.bucket(99)[0].id(), low);
        assert!(global.bucket(99).iter().all(|r| r.id() != high));
    }

    #[test]
    fn test_reserved_key_leaves_registry_unchanged() {
        let mut registry = Registry::new();
        let id = registry.register("foo", || {}, RegisterOptions::new()).unwrap();

        let err = registry
            .register("__entry", || {}, RegisterOptions::new())
            .unwrap_err();
        assert!(matches!(err, RegistrationError::ReservedKey { .. }));
        let err = registry
            .register("foo.__entry.bar", || {}, RegisterOptions::new())
            .unwrap_err();
        assert!(matches!(err, RegistrationError::ReservedKey { .. }));

        assert_eq!(registry.len(), 1);
        assert!(registry.node("foo").unwrap().contains(id));
        assert!(registry.node("foo").unwrap().child("__entry").is_none());
    }

    #[test]
    fn test_empty_segment_rejected() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register("foo..bar", || {}, RegisterOptions::new()),
            Err(RegistrationError::EmptySegment { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reset_empties_registry() {
        let mut registry = Registry::new();
        let before = registry.register_global(|| {}, RegisterOptions::new()).unwrap();
        registry.register("a.b.c", || {}, RegisterOptions::new()).unwrap();
        assert_eq!(registry.len(), 2);

        registry.reset();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.global_node().is_none());

        let after = registry.register_global(|| {}, RegisterOptions::new()).unwrap();
        assert!(after > before);
    }

    #[test]
    fn test_bad_config_rejected() {
        assert!(Registry::with_config(DispatcherConfig::new().entry_key("")).is_err());
    }
}
