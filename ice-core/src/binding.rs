//! Event bindings: which event is delegated for which selector.

use crate::selector::Selector;
use std::fmt;

/// One delegated event and the selector it is scoped to.
///
/// Bindings are produced while the registry is built and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    event: String,
    selector: Selector,
}

impl EventBinding {
    /// Create a binding.
    pub fn new(event: impl Into<String>, selector: Selector) -> Self {
        Self {
            event: event.into(),
            selector,
        }
    }

    /// Event name, e.g. `click` or `custom.event`.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Selector the delegated listener filters on.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl fmt::Display for EventBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.event, self.selector)
    }
}
