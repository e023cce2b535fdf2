//! # ice - Declarative Event Delegation
//!
//! Elements declare which handler an event should reach through `data-ice`
//! attributes; Ice installs one delegated listener per event name on the
//! document root and routes every event to the declared handler.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ice::prelude::*;
//!
//! // <button data-ice="math.square" data-ice-params="4">square</button>
//! let ns = Namespace::new().with("math.square", handler_fn(|call| {
//!     let n: i64 = call.extract().unwrap_or_default();
//!     println!("{}", n * n);
//! }))?;
//!
//! let ice = Ice::init(IceConfig::new(), ns, &doc)?;
//! for event in ice.events() {
//!     // attach a root listener for `event`
//! }
//!
//! // inside the root listener
//! ice.handle_event(&doc, &Event::new("click", target));
//! ```
//!
//! ## Declaring handlers
//!
//! | attribute                      | effect                                       |
//! |--------------------------------|----------------------------------------------|
//! | `data-ice="a.b"`               | handler for the element's default events     |
//! | `data-ice-dblclick="a.c"`      | handler for `dblclick`, bound on any element |
//! | `data-ice-custom-event="a.d"`  | handler for `custom.event`                   |
//! | `data-ice-params="..."`        | opaque arguments passed to the handler       |
//! | `data-ice-callback="a.e"`      | target of [`Ice::callback`]                  |
//!
//! With [`Syntax::Piped`], `data-ice="click|a.b"` names the event in the value.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod bootstrap;
mod config;

pub use bootstrap::Ice;
pub use config::IceConfig;

pub use ice_core::{
    // Handler
    Call,
    // Errors
    ConfigError,
    // Document
    Document,
    ElementId,
    // Event
    Event,
    EventBinding,
    ExtractError,
    FromArgs,
    Handler,
    HandlerDeclaration,
    HandlerPath,
    // Hook
    Dispatch,
    Hook,
    HookResult,
    IceError,
    InstanceRef,
    Method,
    NamespaceError,
    Receiver,
    // Resolution
    Resolve,
    ResolvedHandler,
    Selector,
    SelectorError,
    TypeTag,
    handler_fn,
};

pub use ice_std::{
    AttributeNames, AttributeReader, DelegatedListener, DispatchOutcome, Dispatcher, DomTree,
    EventRegistry, EventRegistryBuilder, Syntax,
};

/// Handler directories.
pub mod namespace {
    #![allow(clippy::wildcard_imports)]
    pub use ice_std::namespace::*;
}

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use ice_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use ice_std::testing::*;
}

pub use namespace::{HandlerTable, Instance, Namespace, SharedNamespace};

/// Prelude module - common imports for Ice.
///
/// # Usage
///
/// ```rust,ignore
/// use ice::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Call, Document, ElementId, Event, Handler, Hook, HookResult, Ice, IceConfig, IceError,
        Instance, Namespace, Resolve, SharedNamespace, Syntax, handler_fn,
    };
}

#[cfg(feature = "inventory")]
pub use inventory;
#[cfg(feature = "phf")]
pub use phf;
