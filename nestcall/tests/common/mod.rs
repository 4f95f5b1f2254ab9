#![allow(dead_code)]

use nestcall::{Dispatcher, testing::SpyAction};

// ============================================================================
// Fixtures
// ============================================================================

/// A fresh dispatcher with the default keys plus two spies.
pub struct Fixture {
    pub app: Dispatcher,
    pub one: SpyAction,
    pub two: SpyAction,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            app: Dispatcher::new(),
            one: SpyAction::new(),
            two: SpyAction::new(),
        }
    }
}

/// Ids of the records registered directly at `path`, highest priority first.
pub fn ids_at(app: &Dispatcher, path: &str) -> Vec<nestcall::ActionId> {
    app.registry()
        .node(path)
        .map(|node| node.records().map(|r| r.id()).collect())
        .unwrap_or_default()
}
