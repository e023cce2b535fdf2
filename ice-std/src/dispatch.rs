//! # Dispatcher
//!
//! One [`DelegatedListener`] per registry binding. The host forwards every
//! event it receives on its root to [`Dispatcher::dispatch`], which finds the
//! delegation targets on the propagation path and invokes what they declare.
//!
//! Dispatch never fails. Each reason an element is skipped is reported as a
//! `trace` record under the `tracing` feature and otherwise dropped.

use crate::{attributes::AttributeReader, registry::EventRegistry};
use ice_core::{Dispatch, Document, ElementId, Event, EventBinding, Hook, HookResult, Resolve};

/// A listener bound on the document root for one event name.
#[derive(Debug, Clone)]
pub struct DelegatedListener {
    binding: EventBinding,
}

impl DelegatedListener {
    /// Create a listener for a binding.
    pub fn new(binding: EventBinding) -> Self {
        Self { binding }
    }

    /// The binding this listener delegates for.
    pub fn binding(&self) -> &EventBinding {
        &self.binding
    }

    /// The event name it listens to.
    pub fn event(&self) -> &str {
        self.binding.event()
    }

    /// The elements on the propagation path that match the selector,
    /// innermost first.
    pub fn targets<D: Document>(&self, doc: &D, event: &Event) -> Vec<ElementId> {
        let path = if event.bubbles() {
            doc.propagation_path(event.target())
        } else {
            vec![event.target()]
        };
        path.into_iter()
            .filter(|&element| self.binding.selector().matches(doc, element))
            .collect()
    }
}

/// What a dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Elements that matched the delegated selector.
    pub matched: usize,
    /// Handlers actually invoked.
    pub invoked: usize,
}

impl DispatchOutcome {
    /// Whether at least one handler ran.
    pub fn is_handled(&self) -> bool {
        self.invoked > 0
    }
}

/// Routes raw events to the handlers elements declare.
pub struct Dispatcher<R> {
    listeners: Vec<DelegatedListener>,
    reader: AttributeReader,
    hooks: Vec<Box<dyn Hook>>,
    resolver: R,
}

impl<R: Resolve> Dispatcher<R> {
    /// Install one listener per registry binding.
    pub fn new(registry: &EventRegistry, reader: AttributeReader, resolver: R) -> Self {
        let listeners = registry
            .bindings()
            .iter()
            .map(|binding| {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    event = binding.event(),
                    selector = %binding.selector(),
                    "Installing delegated listener"
                );
                DelegatedListener::new(binding.clone())
            })
            .collect();
        Self {
            listeners,
            reader,
            hooks: Vec::new(),
            resolver,
        }
    }

    /// Add a hook (builder style).
    pub fn with_hook<H: Hook>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Add a boxed hook.
    pub fn push_hook(&mut self, hook: Box<dyn Hook>) {
        self.hooks.push(hook);
    }

    /// The installed listeners, in registry order.
    pub fn listeners(&self) -> &[DelegatedListener] {
        &self.listeners
    }

    /// The listener for an event name.
    pub fn listener(&self, event: &str) -> Option<&DelegatedListener> {
        self.listeners.iter().find(|l| l.event() == event)
    }

    /// The attribute reader.
    pub fn reader(&self) -> &AttributeReader {
        &self.reader
    }

    /// The resolver handlers are looked up in.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Deliver an event raised in `doc`.
    pub fn dispatch<D: Document>(&self, doc: &D, event: &Event) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        let Some(listener) = self.listener(event.kind()) else {
            return outcome;
        };

        for element in listener.targets(doc, event) {
            outcome.matched += 1;
            if self.deliver(doc, event, element) {
                outcome.invoked += 1;
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        outcome
    }

    fn deliver<D: Document>(&self, doc: &D, event: &Event, element: ElementId) -> bool {
        if doc.is_disabled(element) {
            #[cfg(feature = "tracing")]
            tracing::trace!(element = element.index(), "Skipping disabled element");
            return false;
        }

        let Some(declaration) = self.reader.read(doc, element, event.kind()) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                element = element.index(),
                event = event.kind(),
                "No handler declared"
            );
            return false;
        };

        let dispatch = Dispatch {
            event,
            element,
            declaration: &declaration,
        };
        for hook in &self.hooks {
            if hook.on_dispatch(&dispatch) == HookResult::Stop {
                #[cfg(feature = "tracing")]
                tracing::trace!(element = element.index(), "Invocation stopped by hook");
                return false;
            }
        }

        let Some(resolved) = self.resolver.resolve(&declaration.path) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(handler = %declaration.path, "Handler did not resolve");
            return false;
        };
        resolved.invoke(declaration.args.as_deref(), element, Some(event));
        true
    }

    /// Invoke the callback `element` declares, with `params` and no event.
    ///
    /// Returns whether a handler ran.
    pub fn callback<D: Document>(&self, doc: &D, element: ElementId, params: Option<&str>) -> bool {
        let Some(path) = self.reader.callback_path(doc, element) else {
            return false;
        };
        let Some(resolved) = self.resolver.resolve(&path) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(handler = %path, "Callback did not resolve");
            return false;
        };
        resolved.invoke(params, element, None);
        true
    }
}
