//! # ice-core
//!
//! Core traits for Ice, a declarative event delegation library for HTML
//! documents.
//!
//! Elements name the handler they want with data attributes:
//!
//! ```html
//! <button data-ice="math.square" data-ice-params="4">square</button>
//! <a data-ice="alert" data-ice-dblclick="confirm" data-ice-custom-event="doSomething">
//! ```
//!
//! A single delegated listener per event name sits at the document root; on
//! every event it reads the attributes of the matching element, resolves the
//! dotted path and invokes the handler with `(args, element, event)`.
//!
//! This crate has minimal dependencies and only holds the contracts shared
//! by `ice-std` and by host integrations.
//!
//! # Layers
//!
//! ## Document ([`Document`])
//!
//! The host tree, read-only. Ice never owns or mutates the DOM.
//!
//! ## Declaration ([`HandlerDeclaration`], [`EventBinding`], [`Selector`])
//!
//! What elements declare and which events get delegated for which selector.
//!
//! ## Resolution ([`Resolve`])
//!
//! The handler directory, injected by the host. Resolution yields an
//! `Option<ResolvedHandler>`: a missing handler is a normal outcome.
//!
//! ## Invocation ([`Handler`], [`Hook`])
//!
//! Handlers receive a [`Call`]; hooks observe or veto each invocation.
//!
//! # Error Types
//!
//! - [`IceError`] - Top-level error type
//! - [`SelectorError`] - Selector parsing errors
//! - [`NamespaceError`] - Handler registration errors
//! - [`ConfigError`] - Configuration errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod binding;
mod context;
mod declaration;
mod document;
mod error;
mod event;
mod handler;
mod hook;
mod resolve;
mod selector;

// Re-exports
pub use binding::EventBinding;
pub use context::{ExtractError, FromArgs, InstanceRef, Receiver, TypeTag};
pub use declaration::{HandlerDeclaration, HandlerPath};
pub use document::{Document, ElementId};
pub use error::{ConfigError, IceError, NamespaceError, SelectorError};
pub use event::Event;
pub use handler::{Call, Handler, Method, handler_fn};
pub use hook::{Dispatch, Hook, HookResult};
pub use resolve::{Resolve, ResolvedHandler};
pub use selector::{AttributeMatcher, AttributeOp, Compound, Selector};
