//! Logging hook for dispatch observation.

use ice_core::{Dispatch, Hook, HookResult};

/// A hook that logs every delegated invocation.
#[derive(Debug, Clone, Default)]
pub struct LoggingHook {
    name: Option<String>,
}

impl LoggingHook {
    /// Create an anonymous logging hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging hook that tags its records with `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Hook for LoggingHook {
    fn on_dispatch(&self, dispatch: &Dispatch<'_>) -> HookResult {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                hook = self.name.as_deref().unwrap_or("ice"),
                event = dispatch.event.kind(),
                element = dispatch.element.index(),
                handler = %dispatch.declaration.path,
                args = ?dispatch.declaration.args,
                "Dispatching declared handler"
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (&self.name, dispatch); // Suppress unused warning
        }
        HookResult::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ice_core::{ElementId, Event, HandlerDeclaration, HandlerPath};

    #[test]
    fn test_logging_hook_continues() {
        let event = Event::new("click", ElementId(1));
        let declaration = HandlerDeclaration {
            path: HandlerPath::parse("greet.sayHello"),
            args: None,
        };
        let dispatch = Dispatch {
            event: &event,
            element: ElementId(1),
            declaration: &declaration,
        };
        assert_eq!(LoggingHook::named("test").on_dispatch(&dispatch), HookResult::Next);
    }
}
