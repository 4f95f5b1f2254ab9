//! # nestcall - Hierarchical Action Dispatcher
//!
//! `nestcall` runs callbacks registered under dot-separated namespaces. Running a
//! namespace runs it and everything nested below it, together with the global
//! actions that apply everywhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use nestcall::prelude::*;
//!
//! let mut app = Dispatcher::new();
//! let audit = RegisterOptions::new().with_excludes("health");
//! app.register_global_action_with(|| println!("audit"), audit).unwrap();
//! app.register_action("user", || println!("user")).unwrap();
//! app.register_action("user.create", || println!("user.create")).unwrap();
//!
//! // audit, user, user.create
//! assert_eq!(app.run("user").unwrap().total(), 3);
//! // audit, user.create
//! assert_eq!(app.run("user.create").unwrap().total(), 2);
//! // nothing registered, audit excluded
//! assert_eq!(app.run("health").unwrap().total(), 0);
//! ```
//!
//! ## Rules
//!
//! - Higher priority runs first; equal priorities run in registration order.
//! - Global actions run at most once per call to [`Dispatcher::run`].
//! - An action whose excludes contain one of the requested paths (exact match) is skipped.
//! - A failing action aborts the run and its error is returned.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for registration, reset and dispatch.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use nestcall_core::{
    // Actions
    Action,
    ActionId,
    // Errors
    BoxError,
    ConfigError,
    DEFAULT_ENTRY_KEY,
    DEFAULT_GLOBAL_KEY,
    DEFAULT_PRIORITY,
    DispatchError,
    // Options
    DispatcherConfig,
    // Paths
    Excludes,
    IntoOutcome,
    NamespacePath,
    NestcallError,
    Priority,
    RegisterOptions,
    RegistrationError,
    RunOptions,
    SEPARATOR,
    Scope,
};

// Engine
pub use nestcall_std::{ActionRecord, Dispatcher, NamespaceNode, Registry, RunSummary};

/// Scope resolution.
pub mod resolver {
    pub use nestcall_std::resolver::{Resolution, Target, resolve};
}

/// Testing utilities.
pub mod testing {
    pub use nestcall_std::testing::{FailingAction, OrderRecorder, SpyAction};
}

/// Prelude module - common imports for nestcall.
///
/// # Usage
///
/// ```rust
/// use nestcall::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action, ActionId, DispatchError, Dispatcher, DispatcherConfig, NestcallError,
        RegisterOptions, RegistrationError, RunOptions, RunSummary, Scope,
    };
}
