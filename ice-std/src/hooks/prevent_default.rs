//! Cancel the default action of handled events.

use ice_core::{Dispatch, Hook, HookResult};

/// A hook that cancels the default action of every event it sees.
///
/// Install it to keep links and forms from navigating when a declared
/// handler takes over. Non-cancelable events are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreventDefaultHook;

impl Hook for PreventDefaultHook {
    fn on_dispatch(&self, dispatch: &Dispatch<'_>) -> HookResult {
        dispatch.event.prevent_default();
        HookResult::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ice_core::{ElementId, Event, HandlerDeclaration, HandlerPath};

    #[test]
    fn test_prevents_default() {
        let event = Event::new("submit", ElementId(4));
        let declaration = HandlerDeclaration {
            path: HandlerPath::parse("form.save"),
            args: None,
        };
        let dispatch = Dispatch {
            event: &event,
            element: ElementId(4),
            declaration: &declaration,
        };
        assert_eq!(PreventDefaultHook.on_dispatch(&dispatch), HookResult::Next);
        assert!(event.is_default_prevented());
    }
}
