//! Testing utilities for nestcall.
//!
//! This module provides actions that make it easy to assert what a run did.
//!
//! # Features
//!
//! - [`SpyAction`]: Counts invocations and stamps each one on a process-wide clock
//! - [`OrderRecorder`]: Hands out labelled actions that log into a shared list
//! - [`FailingAction`]: An action that always returns an error

use nestcall_core::{Action, BoxError};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Process-wide invocation clock shared by every [`SpyAction`].
static CLOCK: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// Spy Action
// ============================================================================

/// An action that counts its invocations.
///
/// Every invocation also records a tick of a process-wide clock, so two spies
/// can be compared to see which one ran last.
///
/// # Example
///
/// ```rust,ignore
/// let first = SpyAction::new();
/// let second = SpyAction::new();
/// // register both, run...
/// assert!(first.last_call().unwrap() < second.last_call().unwrap());
/// ```
#[derive(Debug, Default)]
pub struct SpyAction {
    count: Arc<AtomicUsize>,
    // Stores tick + 1 so that zero means "never called".
    last_call: Arc<AtomicUsize>,
}

impl SpyAction {
    /// Create a new spy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Whether the spy has been invoked.
    pub fn called(&self) -> bool {
        self.call_count() > 0
    }

    /// Clock tick of the latest invocation.
    pub fn last_call(&self) -> Option<usize> {
        match self.last_call.load(Ordering::SeqCst) {
            0 => None,
            tick => Some(tick - 1),
        }
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
        self.last_call.store(0, Ordering::SeqCst);
    }
}

impl Clone for SpyAction {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            last_call: self.last_call.clone(),
        }
    }
}

impl Action for SpyAction {
    fn invoke(&self) -> Result<(), BoxError> {
        let tick = CLOCK.fetch_add(1, Ordering::SeqCst);
        self.last_call.store(tick + 1, Ordering::SeqCst);
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Order Recorder
// ============================================================================

/// Produces actions that append their label to a shared log.
#[derive(Debug, Clone, Default)]
pub struct OrderRecorder {
    labels: Arc<Mutex<Vec<&'static str>>>,
}

impl OrderRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// An action that records `label` each time it runs.
    pub fn action(&self, label: &'static str) -> impl Action + use<> {
        let labels = self.labels.clone();
        move || labels.lock().unwrap().push(label)
    }

    /// Labels recorded so far, in invocation order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.labels.lock().unwrap().clone()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.labels.lock().unwrap().clear();
    }
}

// ============================================================================
// Failing Action
// ============================================================================

/// An action that always fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingAction {
    message: String,
}

impl FailingAction {
    /// Create a failing action.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Action for FailingAction {
    fn invoke(&self) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
