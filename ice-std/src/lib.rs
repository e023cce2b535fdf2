//! # ice-std
//!
//! Standard implementations for the Ice declarative event delegation library.
//!
//! This crate provides:
//! - **Attribute reading**: [`AttributeReader`], [`AttributeNames`]
//! - **Name resolution**: [`Namespace`], [`SharedNamespace`], [`HandlerTable`]
//! - **Event registry**: [`EventRegistry`], [`Syntax`]
//! - **Dispatch**: [`Dispatcher`], [`DelegatedListener`]
//! - **Standard hooks**: Logging, PreventDefault
//! - **In-memory document**: [`DomTree`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use ice_core;

// Modules
pub mod attributes;
pub mod case;
pub mod dispatch;
pub mod dom;
pub mod hooks;
pub mod namespace;
pub mod registry;
pub mod testing;

pub use attributes::{AttributeNames, AttributeReader};
pub use dispatch::{DelegatedListener, DispatchOutcome, Dispatcher};
pub use dom::DomTree;
pub use hooks::{LoggingHook, PreventDefaultHook};
pub use namespace::{HandlerTable, Instance, Member, Namespace, SharedNamespace};
pub use registry::{EventRegistry, EventRegistryBuilder, Syntax, default_bindings};

#[cfg(feature = "inventory")]
pub use inventory;
#[cfg(feature = "phf")]
pub use phf;
