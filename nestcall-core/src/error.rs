//! Error types for nestcall.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`NestcallError`] - Top-level error type for all nestcall operations
//! - [`RegistrationError`] - Invalid namespace paths handed to a registration
//! - [`ConfigError`] - Invalid dispatcher configuration
//! - [`DispatchError`] - Failures raised by callbacks during a run

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all nestcall operations.
#[derive(Error, Debug)]
pub enum NestcallError {
    /// A registration was rejected.
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// The dispatcher configuration was rejected.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A callback failed during a run.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors raised while validating a namespace path for registration.
///
/// The tree is never touched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// A path segment collides with the reserved entry key.
    #[error("namespace `{path}` uses the reserved entry key `{key}` as a segment")]
    ReservedKey {
        /// The offending path as given.
        path: String,
        /// The configured entry key.
        key: String,
    },

    /// The path is empty or contains an empty segment (`"foo..bar"`).
    #[error("namespace `{path}` contains an empty segment")]
    EmptySegment {
        /// The offending path as given.
        path: String,
    },
}

/// Errors raised while validating a dispatcher configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A reserved key was configured as the empty string.
    #[error("the {which} key must not be empty")]
    EmptyKey {
        /// `"global"` or `"entry"`.
        which: &'static str,
    },

    /// A reserved key contains the path separator.
    #[error("the {which} key `{key}` must not contain `.`")]
    SeparatorInKey {
        /// `"global"` or `"entry"`.
        which: &'static str,
        /// The rejected key.
        key: String,
    },

    /// The global and entry keys are the same string.
    #[error("the global key and the entry key must differ (both are `{0}`)")]
    KeysCollide(String),
}

/// Errors that can occur while running actions.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// An action returned an error. Actions queued after it in the same run were not invoked.
    #[error("action #{id} (priority {priority}) failed")]
    Action {
        /// Raw identity of the failing record.
        id: u64,
        /// Priority the record was registered with.
        priority: i32,
        /// The error returned by the action.
        #[source]
        source: BoxError,
    },
}
