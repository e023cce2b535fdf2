//! # Hooks
//!
//! Hooks observe each delegated invocation just before the handler is
//! resolved. They can log, mutate the event (for instance cancel its
//! default action) or veto the invocation.
//!
//! A `Stop` only skips the invocation it was returned for. Ice does not
//! support stopping other delegated listeners.

use crate::{declaration::HandlerDeclaration, document::ElementId, event::Event};

/// Result of hook execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookResult {
    /// Continue with the next hook, then the handler.
    Next,
    /// Skip this invocation.
    Stop,
}

/// The invocation a hook is asked about.
#[derive(Debug, Clone, Copy)]
pub struct Dispatch<'a> {
    /// The raw event.
    pub event: &'a Event,
    /// The element that matched the delegated selector.
    pub element: ElementId,
    /// What the element declares for this event.
    pub declaration: &'a HandlerDeclaration,
}

/// An observer run before every invocation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Hook`",
    label = "missing `Hook` implementation",
    note = "Hooks must implement `on_dispatch`."
)]
pub trait Hook: Send + Sync + 'static {
    /// Called before the handler is resolved and invoked.
    fn on_dispatch(&self, dispatch: &Dispatch<'_>) -> HookResult;
}

impl<F> Hook for F
where
    F: Fn(&Dispatch<'_>) -> HookResult + Send + Sync + 'static,
{
    fn on_dispatch(&self, dispatch: &Dispatch<'_>) -> HookResult {
        (self)(dispatch)
    }
}
