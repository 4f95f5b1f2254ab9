//! The dispatcher: registration front-end and synchronous run loop.
//!
//! A run has two phases:
//!
//! 1. **Global phase** - at most once per run. Global records fire unless the run
//!    disables globals or a record excludes one of the requested scope paths.
//! 2. **Namespace phase** - for each requested path, every record at the deepest
//!    matching node and below, highest priority first, ties in registration order.
//!
//! A record fires at most once per run, however many requested paths reach it.
//! The first failing action aborts the run.

use crate::{
    registry::Registry,
    resolver::{self, Resolution},
    tree::ActionRecord,
};
use nestcall_core::{
    Action, ActionId, ConfigError, DispatchError, DispatcherConfig, RegisterOptions,
    RegistrationError, RunOptions, Scope,
};
use std::{cmp::Reverse, collections::HashSet, sync::Arc};

/// Counts of actions invoked by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Global actions invoked.
    pub globals: usize,
    /// Namespace actions invoked.
    pub scoped: usize,
}

impl RunSummary {
    /// Total actions invoked.
    pub const fn total(&self) -> usize {
        self.globals + self.scoped
    }
}

/// Hierarchical action dispatcher.
///
/// # Example
/// ```
/// use nestcall_core::RegisterOptions;
/// use nestcall_std::dispatcher::Dispatcher;
/// use std::sync::{Arc, Mutex};
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let mut dispatcher = Dispatcher::new();
///
/// let l = log.clone();
/// dispatcher.register_global_action(move || l.lock().unwrap().push("global")).unwrap();
/// let l = log.clone();
/// dispatcher.register_action("save", move || l.lock().unwrap().push("save")).unwrap();
/// let l = log.clone();
/// dispatcher
///     .register_action_with(
///         "save.validate",
///         move || l.lock().unwrap().push("validate"),
///         RegisterOptions::new().with_priority(10),
///     )
///     .unwrap();
///
/// let summary = dispatcher.run("save").unwrap();
/// assert_eq!(summary.total(), 3);
/// assert_eq!(*log.lock().unwrap(), ["global", "validate", "save"]);
/// ```
///
/// Registering something that is not callable does not compile:
///
/// ```compile_fail
/// let mut dispatcher = nestcall_std::dispatcher::Dispatcher::new();
/// dispatcher.register_global_action("not a callback");
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher with the default global and entry keys.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Create a dispatcher with custom keys.
    pub fn with_config(config: DispatcherConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: Registry::with_config(config)?,
        })
    }

    /// The name of the global scope.
    pub fn global_key(&self) -> &str {
        self.registry.global_key()
    }

    /// The reserved entry key.
    pub fn entry_key(&self) -> &str {
        self.registry.entry_key()
    }

    /// Register `action` under `path` with default options.
    pub fn register_action<A: Action>(
        &mut self,
        path: &str,
        action: A,
    ) -> Result<ActionId, RegistrationError> {
        self.registry.register(path, action, RegisterOptions::new())
    }

    /// Register `action` under `path`.
    pub fn register_action_with<A: Action>(
        &mut self,
        path: &str,
        action: A,
        options: RegisterOptions,
    ) -> Result<ActionId, RegistrationError> {
        self.registry.register(path, action, options)
    }

    /// Register a global `action` with default options.
    pub fn register_global_action<A: Action>(
        &mut self,
        action: A,
    ) -> Result<ActionId, RegistrationError> {
        self.registry.register_global(action, RegisterOptions::new())
    }

    /// Register a global `action`.
    pub fn register_global_action_with<A: Action>(
        &mut self,
        action: A,
        options: RegisterOptions,
    ) -> Result<ActionId, RegistrationError> {
        self.registry.register_global(action, options)
    }

    /// Run `scope` with globals enabled.
    ///
    /// `scope` is `()` or `None` for globals only, or one or more paths.
    pub fn run(&self, scope: impl Into<Scope>) -> Result<RunSummary, DispatchError> {
        self.run_with(scope, RunOptions::new())
    }

    /// Run `scope` with explicit options.
    pub fn run_with(
        &self,
        scope: impl Into<Scope>,
        options: RunOptions,
    ) -> Result<RunSummary, DispatchError> {
        let scope = scope.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(scopes = ?scope.paths(), run_globals = options.run_globals, "Running");

        let resolution = resolver::resolve(&self.registry, &scope, options);
        let mut run = Run::new(&resolution);

        if let Some(global) = resolution.global() {
            for record in global.records() {
                if run.admit(record) {
                    invoke(record)?;
                    run.summary.globals += 1;
                }
            }
        }

        for target in resolution.targets() {
            let mut batch: Vec<&Arc<ActionRecord>> = Vec::new();
            if target.includes_own {
                target.node.for_each_in_subtree(&mut |record| batch.push(record));
            } else {
                target.node.for_each_below(&mut |record| batch.push(record));
            }
            batch.sort_by_key(|record| (Reverse(record.priority()), record.id()));

            for record in batch {
                if run.admit(record) {
                    invoke(record)?;
                    run.summary.scoped += 1;
                }
            }
        }

        Ok(run.summary)
    }

    /// Discard every registration.
    pub fn reset(&mut self) {
        self.registry.reset();
    }

    /// Read access to the namespace tree.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Per-run bookkeeping.
struct Run<'r, 'a> {
    resolution: &'r Resolution<'a>,
    fired: HashSet<ActionId>,
    summary: RunSummary,
}

impl<'r, 'a> Run<'r, 'a> {
    fn new(resolution: &'r Resolution<'a>) -> Self {
        Self {
            resolution,
            fired: HashSet::new(),
            summary: RunSummary::default(),
        }
    }

    /// Whether `record` should fire now; marks it as fired if so.
    fn admit(&mut self, record: &ActionRecord) -> bool {
        if record.is_excluded_from(self.resolution.requested().iter().copied()) {
            #[cfg(feature = "tracing")]
            tracing::trace!(id = %record.id(), "Skipping excluded action");
            return false;
        }
        self.fired.insert(record.id())
    }
}

fn invoke(record: &ActionRecord) -> Result<(), DispatchError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(id = %record.id(), priority = record.priority(), "Invoking action");

    record.action().invoke().map_err(|source| {
        #[cfg(feature = "tracing")]
        tracing::warn!(id = %record.id(), error = %source, "Action failed");

        DispatchError::Action {
            id: record.id().as_raw(),
            priority: record.priority(),
            source,
        }
    })
}
