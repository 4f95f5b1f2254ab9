//! # nestcall-core
//!
//! Core types for the nestcall hierarchical action dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that registers actions without needing the engine in `nestcall-std`.
//!
//! # Vocabulary
//!
//! - [`Action`] - A no-argument callback run for its side effects
//! - [`NamespacePath`] - A dot-delimited registration path such as `"foo.bar"`
//! - [`Scope`] - What a run executes: globals only, or one or more namespaces
//! - [`Excludes`] - Scope paths under which a record is skipped
//! - [`RegisterOptions`], [`RunOptions`], [`DispatcherConfig`] - Builders
//!
//! # Error Types
//!
//! - [`NestcallError`] - Top-level error type
//! - [`RegistrationError`] - Invalid registration paths
//! - [`ConfigError`] - Invalid dispatcher configuration
//! - [`DispatchError`] - Action failures during a run

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod error;
mod options;
mod path;

// Re-exports
pub use action::{Action, ActionId, DEFAULT_PRIORITY, IntoOutcome, Priority};
pub use error::{BoxError, ConfigError, DispatchError, NestcallError, RegistrationError};
pub use options::{
    DEFAULT_ENTRY_KEY, DEFAULT_GLOBAL_KEY, DispatcherConfig, RegisterOptions, RunOptions,
};
pub use path::{Excludes, NamespacePath, SEPARATOR, Scope};
