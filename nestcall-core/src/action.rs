//! # Actions
//!
//! An action is the unit of work a dispatcher invokes. It takes no input and is
//! run purely for its side effects; whatever it needs it captures.
//!
//! # Usage Patterns
//!
//! 1. **Closure returning `()`**: `|| println!("saved")`
//! 2. **Fallible closure**: `|| -> Result<(), MyError> { ... }`
//! 3. **Struct implementation**: `impl Action for MyAction`
//!
//! A failing action stops the run that invoked it; see [`DispatchError`].
//!
//! [`DispatchError`]: crate::DispatchError

use crate::error::BoxError;
use std::fmt;

/// Execution-order hint. Higher values run earlier.
pub type Priority = i32;

/// Priority used when a registration does not specify one.
pub const DEFAULT_PRIORITY: Priority = 0;

/// A callback registered with a dispatcher.
///
/// Any `Fn() -> O` closure whose output implements [`IntoOutcome`] is an `Action`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Action`",
    label = "expected a callable `Fn() -> ()` or `Fn() -> Result<(), E>`",
    note = "Actions must be `Send + Sync + 'static` and callable without arguments."
)]
pub trait Action: Send + Sync + 'static {
    /// Runs the action.
    fn invoke(&self) -> Result<(), BoxError>;
}

impl<F, O> Action for F
where
    F: Fn() -> O + Send + Sync + 'static,
    O: IntoOutcome,
{
    fn invoke(&self) -> Result<(), BoxError> {
        (self)().into_outcome()
    }
}

/// Conversion of an action's return value into success or failure.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<(), E>` → propagates `E` as a [`BoxError`]
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoOutcome`",
    label = "actions must return `()` or `Result<(), E>`"
)]
pub trait IntoOutcome {
    /// Convert the output into success or a boxed error.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoOutcome for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// Identity of a registered callback record.
///
/// Ids are handed out in registration order and never reused by a dispatcher,
/// not even across a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(u64);

impl ActionId {
    /// Wrap a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
