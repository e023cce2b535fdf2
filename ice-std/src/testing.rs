//! Testing utilities for Ice.
//!
//! # Features
//!
//! - [`RecordingHandler`]: A handler that records every call it receives
//! - [`CountingHandler`]: A handler that only counts invocations
//! - [`RecordingHook`]: A hook that records every dispatch it observes

use ice_core::{Call, Dispatch, ElementId, Handler, Hook, HookResult};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// What a [`RecordingHandler`] saw of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The declared arguments.
    pub args: Option<String>,
    /// The element passed to the handler.
    pub element: ElementId,
    /// Type of the forwarded event, `None` for callback invocations.
    pub event_kind: Option<String>,
    /// Name of the receiving instance, `None` for the global receiver.
    pub receiver: Option<String>,
}

/// A handler that records all calls it receives.
///
/// # Example
///
/// ```rust,ignore
/// let greet = RecordingHandler::new();
/// namespace.insert("greet.sayHello", greet.clone())?;
///
/// // Dispatch...
///
/// assert_eq!(greet.calls()[0].args.as_deref(), Some("world"));
/// ```
#[derive(Clone, Default)]
pub struct RecordingHandler {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingHandler {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Handler for RecordingHandler {
    fn call(&self, call: Call<'_>) {
        self.calls.lock().unwrap().push(RecordedCall {
            args: call.args().map(str::to_string),
            element: call.element(),
            event_kind: call.event().map(|event| event.kind().to_string()),
            receiver: call.receiver().instance().map(|i| i.name().to_string()),
        });
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Handler for CountingHandler {
    fn call(&self, _call: Call<'_>) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records the elements it was asked about.
#[derive(Clone)]
pub struct RecordingHook {
    elements: Arc<Mutex<Vec<ElementId>>>,
    result: HookResult,
}

impl RecordingHook {
    /// Create a new recording hook that returns `Next`.
    pub fn new() -> Self {
        Self::with_result(HookResult::Next)
    }

    /// Create a recording hook that returns a specific result.
    pub fn with_result(result: HookResult) -> Self {
        Self {
            elements: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get the recorded elements.
    pub fn elements(&self) -> Vec<ElementId> {
        self.elements.lock().unwrap().clone()
    }

    /// Get the number of observed dispatches.
    pub fn count(&self) -> usize {
        self.elements.lock().unwrap().len()
    }
}

impl Default for RecordingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Hook for RecordingHook {
    fn on_dispatch(&self, dispatch: &Dispatch<'_>) -> HookResult {
        self.elements.lock().unwrap().push(dispatch.element);
        self.result
    }
}
