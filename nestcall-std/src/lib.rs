//! # nestcall-std
//!
//! The dispatch engine for nestcall.
//!
//! This crate provides:
//! - **Namespace tree**: [`NamespaceNode`], [`ActionRecord`]
//! - **Registry**: [`Registry`], path validation and insertion
//! - **Scope resolution**: [`resolver::resolve`]
//! - **Dispatch**: [`Dispatcher`], [`RunSummary`]
//! - **Testing**: spies and recorders in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use nestcall_core;

// Modules
pub mod dispatcher;
pub mod registry;
pub mod resolver;
pub mod testing;
pub mod tree;

pub use dispatcher::{Dispatcher, RunSummary};
pub use registry::Registry;
pub use tree::{ActionRecord, NamespaceNode};
