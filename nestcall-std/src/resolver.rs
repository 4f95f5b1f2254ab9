//! Scope resolution.
//!
//! Turns a [`Scope`] into the tree nodes a run executes. A requested path
//! resolves to its deepest node; that node and its descendants are in scope,
//! its ancestors are not. Paths with no matching node resolve to nothing.

use crate::{registry::Registry, tree::NamespaceNode};
use nestcall_core::{NamespacePath, RunOptions, Scope};

/// A resolved namespace target.
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    /// The requested path.
    pub path: &'a str,
    /// The deepest node matching `path`.
    pub node: &'a NamespaceNode,
    /// Whether `node`'s own records belong to this target. False for the global
    /// node, whose own records only fire in the global phase.
    pub includes_own: bool,
}

/// The nodes selected for one run.
#[derive(Debug)]
pub struct Resolution<'a> {
    requested: Vec<&'a str>,
    global: Option<&'a NamespaceNode>,
    targets: Vec<Target<'a>>,
}

impl<'a> Resolution<'a> {
    /// Every requested scope path, including unresolved ones. Exclusions match against these.
    pub fn requested(&self) -> &[&'a str] {
        &self.requested
    }

    /// The global node, when the global phase runs and has a node.
    pub fn global(&self) -> Option<&'a NamespaceNode> {
        self.global
    }

    /// Resolved namespace targets in request order.
    pub fn targets(&self) -> &[Target<'a>] {
        &self.targets
    }
}

/// Resolve `scope` against `registry`.
///
/// Requesting the global key targets only the namespaces below the global
/// node; the global node's own records stay in the global phase.
pub fn resolve<'a>(
    registry: &'a Registry,
    scope: &'a Scope,
    options: RunOptions,
) -> Resolution<'a> {
    let requested: Vec<&str> = scope.paths().iter().map(String::as_str).collect();

    let global = if options.run_globals {
        registry.global_node()
    } else {
        None
    };

    let targets = requested
        .iter()
        .copied()
        .filter_map(|path| {
            let node = NamespacePath::parse(path)
                .ok()
                .and_then(|parsed| registry.root().descend(parsed.segments()));

            #[cfg(feature = "tracing")]
            {
                if node.is_none() {
                    tracing::trace!(scope = %path, "Scope has no registrations");
                }
            }

            node.map(|node| Target {
                path,
                node,
                includes_own: path != registry.global_key(),
            })
        })
        .collect();

    Resolution {
        requested,
        global,
        targets,
    }
}
