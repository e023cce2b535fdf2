//! # Resolution seam
//!
//! A [`Resolve`] implementation is the handler directory: it turns a
//! [`HandlerPath`] into a callable plus the receiver to invoke it with.
//!
//! "Not found" is a normal outcome, expressed as `None`; callers never treat
//! it as an error.

use crate::{
    context::Receiver,
    declaration::HandlerPath,
    document::ElementId,
    event::Event,
    handler::{Call, Handler},
};
use std::{fmt, sync::Arc};

/// A callable and its invocation context.
#[derive(Clone)]
pub struct ResolvedHandler {
    handler: Arc<dyn Handler>,
    receiver: Receiver,
}

impl ResolvedHandler {
    /// Pair a handler with its receiver.
    pub fn new(handler: Arc<dyn Handler>, receiver: Receiver) -> Self {
        Self { handler, receiver }
    }

    /// The handler.
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// The invocation context.
    pub fn receiver(&self) -> &Receiver {
        &self.receiver
    }

    /// Call the handler with `(args, element, event)` against its receiver.
    pub fn invoke(&self, args: Option<&str>, element: ElementId, event: Option<&Event>) {
        self.handler.call(Call::new(&self.receiver, args, element, event));
    }
}

impl fmt::Debug for ResolvedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedHandler")
            .field("receiver", &self.receiver)
            .finish_non_exhaustive()
    }
}

/// A handler directory.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve handler paths",
    label = "missing `Resolve` implementation",
    note = "Implement `Resolve::resolve` to look up handlers by dotted path."
)]
pub trait Resolve: Send + Sync {
    /// Look up a handler. Called on every dispatch; implementations must not
    /// cache results across redefinitions.
    fn resolve(&self, path: &HandlerPath) -> Option<ResolvedHandler>;
}

impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn resolve(&self, path: &HandlerPath) -> Option<ResolvedHandler> {
        (**self).resolve(path)
    }
}

impl<R: Resolve + ?Sized> Resolve for &R {
    fn resolve(&self, path: &HandlerPath) -> Option<ResolvedHandler> {
        (**self).resolve(path)
    }
}
