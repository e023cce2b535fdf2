//! # Event Registry
//!
//! The set of (event name, delegated selector) bindings, built once from a
//! default table plus a single scan of the document and read-only afterwards.
//!
//! At most one binding exists per event name. Later discoveries of an event
//! that is already bound are ignored, so a default binding always wins over
//! a discovered one.

use crate::attributes::{AttributeNames, PIPE};
use ice_core::{Document, EventBinding, Selector};

/// How handler declarations are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syntax {
    /// `data-ice="click|greet.sayHello"`: the generic attribute names its
    /// event.
    Piped,
    /// `data-ice="greet.sayHello"` bound by tag, plus `data-ice-<event>`
    /// overrides.
    #[default]
    Attribute,
}

/// Tags bound by default in [`Syntax::Attribute`], per event.
pub const DEFAULT_TAGS: &[(&str, &[&str])] = &[
    ("click", &["a", "div", "button"]),
    ("change", &["input", "select", "textarea"]),
    ("submit", &["form"]),
];

/// Events bound by default in [`Syntax::Piped`].
pub const PIPED_EVENTS: &[&str] = &["click", "change", "focus", "blur", "submit"];

/// The default bindings for a syntax.
///
/// ```text
/// Attribute: click  => a[data-ice], div[data-ice], button[data-ice]
///            change => input[data-ice], select[data-ice], textarea[data-ice]
///            submit => form[data-ice]
/// Piped:     click  => [data-ice^="click|"]  (likewise change, focus, blur, submit)
/// ```
pub fn default_bindings(names: &AttributeNames, syntax: Syntax) -> Vec<EventBinding> {
    match syntax {
        Syntax::Attribute => DEFAULT_TAGS
            .iter()
            .map(|(event, tags)| {
                EventBinding::new(
                    *event,
                    Selector::tags_with_attribute(tags.iter().copied(), names.generic()),
                )
            })
            .collect(),
        Syntax::Piped => PIPED_EVENTS
            .iter()
            .map(|event| piped_binding(names, event))
            .collect(),
    }
}

fn piped_binding(names: &AttributeNames, event: &str) -> EventBinding {
    let prefix = format!("{event}{PIPE}");
    EventBinding::new(event, Selector::attribute_prefix(names.generic(), &prefix))
}

/// Builder for [`EventRegistry`].
#[derive(Debug, Clone, Default)]
pub struct EventRegistryBuilder {
    bindings: Vec<EventBinding>,
}

impl EventRegistryBuilder {
    /// Add a binding. Returns `false` and drops it if the event is already
    /// bound.
    pub fn insert(&mut self, binding: EventBinding) -> bool {
        if self.contains(binding.event()) {
            return false;
        }
        self.bindings.push(binding);
        true
    }

    /// Add bindings in order, skipping events already bound.
    pub fn extend(&mut self, bindings: impl IntoIterator<Item = EventBinding>) {
        for binding in bindings {
            self.insert(binding);
        }
    }

    /// Whether an event is already bound.
    pub fn contains(&self, event: &str) -> bool {
        self.bindings.iter().any(|b| b.event() == event)
    }

    /// Add the bindings discovered in `doc`.
    ///
    /// Every `data-ice-<event>` attribute opts `<event>` in with selector
    /// `[data-ice-<event>]`. In [`Syntax::Piped`], generic values of the form
    /// `event|path` and the legacy `data-ice-event` attribute opt their
    /// event in with selector `[data-ice^="event|"]`; there `data-ice-event`
    /// names an event rather than declaring a handler for `event`.
    pub fn discover<D: Document>(&mut self, doc: &D, names: &AttributeNames, syntax: Syntax) {
        for element in doc.elements() {
            for attribute in doc.attribute_names(element) {
                if syntax == Syntax::Piped && attribute == names.legacy_event() {
                    continue;
                }
                if let Some(event) = names.event_for(attribute) {
                    let selector = Selector::attribute(&names.for_event(&event));
                    self.insert(EventBinding::new(event, selector));
                }
            }

            if syntax != Syntax::Piped {
                continue;
            }
            let piped = doc
                .attribute(element, names.generic())
                .and_then(|value| value.split_once(PIPE))
                .map(|(event, _)| event);
            let legacy = doc.attribute(element, names.legacy_event());
            for event in piped.into_iter().chain(legacy).map(str::trim) {
                if !event.is_empty() {
                    self.insert(piped_binding(names, event));
                }
            }
        }
    }

    /// Finish the registry.
    pub fn build(self) -> EventRegistry {
        EventRegistry {
            bindings: self.bindings,
        }
    }
}

/// The immutable binding set.
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    bindings: Vec<EventBinding>,
}

impl EventRegistry {
    /// Start building a registry.
    pub fn builder() -> EventRegistryBuilder {
        EventRegistryBuilder::default()
    }

    /// Seed with `defaults`, then scan `doc` once.
    pub fn scan<D: Document>(
        doc: &D,
        names: &AttributeNames,
        syntax: Syntax,
        defaults: impl IntoIterator<Item = EventBinding>,
    ) -> Self {
        let mut builder = Self::builder();
        builder.extend(defaults);
        builder.discover(doc, names, syntax);
        builder.build()
    }

    /// The bindings, in registration order.
    pub fn bindings(&self) -> &[EventBinding] {
        &self.bindings
    }

    /// The bound event names, in registration order.
    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        self.bindings.iter().map(EventBinding::event)
    }

    /// The binding for an event name.
    pub fn get(&self, event: &str) -> Option<&EventBinding> {
        self.bindings.iter().find(|b| b.event() == event)
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
