//! The raw event object forwarded to handlers.

use crate::document::ElementId;
use std::cell::Cell;

/// An event raised by the host document.
///
/// Handlers receive it by shared reference; the cancelation flags use
/// interior mutability so a handler can call [`Event::prevent_default`]
/// without the dispatcher giving up ownership.
#[derive(Debug, Clone)]
pub struct Event {
    kind: String,
    target: ElementId,
    bubbles: bool,
    cancelable: bool,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl Event {
    /// Create a bubbling, cancelable event of the given type.
    pub fn new(kind: impl Into<String>, target: ElementId) -> Self {
        Self {
            kind: kind.into(),
            target,
            bubbles: true,
            cancelable: true,
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    /// Set whether the event bubbles.
    pub fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    /// Set whether the default action can be canceled.
    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Event type, e.g. `click` or `custom.event`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The element that raised the event.
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// Whether the event bubbles.
    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// Whether the default action can be canceled.
    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Cancel the default action. No effect on non-cancelable events.
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    /// Check if the default action was canceled.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Stop the event from reaching further delegation targets.
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    /// Check if propagation was stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevent_default_respects_cancelable() {
        let event = Event::new("click", ElementId(3));
        event.prevent_default();
        assert!(event.is_default_prevented());

        let event = Event::new("load", ElementId(0)).with_cancelable(false);
        event.prevent_default();
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn test_stop_propagation() {
        let event = Event::new("submit", ElementId(1));
        assert!(!event.is_propagation_stopped());
        event.stop_propagation();
        assert!(event.is_propagation_stopped());
        assert_eq!(event.kind(), "submit");
        assert_eq!(event.target(), ElementId(1));
    }
}
