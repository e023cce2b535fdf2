//! Attribute Reader: what an element declares for an event type.
//!
//! The reserved attributes, for the default `ice` prefix:
//!
//! | attribute           | meaning                                         |
//! |---------------------|-------------------------------------------------|
//! | `data-ice`          | generic handler path, optionally `event\|path`  |
//! | `data-ice-<event>`  | handler path for one event type                 |
//! | `data-ice-params`   | opaque arguments, shared by every event         |
//! | `data-ice-callback` | path invoked through the callback entry point   |
//! | `data-ice-event`    | legacy event opt-in, piped declarations only    |

use crate::case::{attribute_name, camelize, data_key, uncamelize};
use ice_core::{Document, ElementId, HandlerDeclaration, HandlerPath};

/// Separator between event and path in piped declarations.
pub const PIPE: char = '|';

/// The reserved attribute names derived from a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNames {
    key_prefix: String,
    generic: String,
    params: String,
    callback: String,
    legacy_event: String,
}

impl AttributeNames {
    /// Derive the attribute names for a prefix such as `ice`.
    pub fn new(prefix: &str) -> Self {
        let generic = format!("data-{prefix}");
        let key_prefix = data_key(&generic).unwrap_or_else(|| prefix.to_string());
        Self {
            params: attribute_name(&format!("{key_prefix}Params")),
            callback: attribute_name(&format!("{key_prefix}Callback")),
            legacy_event: attribute_name(&format!("{key_prefix}Event")),
            key_prefix,
            generic,
        }
    }

    /// The generic handler attribute, e.g. `data-ice`.
    pub fn generic(&self) -> &str {
        &self.generic
    }

    /// The arguments attribute, e.g. `data-ice-params`.
    pub fn params(&self) -> &str {
        &self.params
    }

    /// The callback attribute, e.g. `data-ice-callback`.
    pub fn callback(&self) -> &str {
        &self.callback
    }

    /// The legacy event opt-in attribute, e.g. `data-ice-event`.
    pub fn legacy_event(&self) -> &str {
        &self.legacy_event
    }

    /// The type-specific attribute for an event: `dblclick` → `data-ice-dblclick`.
    pub fn for_event(&self, event_type: &str) -> String {
        attribute_name(&format!("{}{}", self.key_prefix, camelize(event_type)))
    }

    /// Whether the attribute belongs to the reserved family.
    pub fn is_prefixed(&self, attribute: &str) -> bool {
        attribute == self.generic
            || attribute
                .strip_prefix(self.generic.as_str())
                .is_some_and(|rest| rest.starts_with('-'))
    }

    /// Whether the attribute is one of the core attributes that never name
    /// an event.
    ///
    /// The legacy event attribute is not among them: outside piped
    /// declarations `data-ice-event` is the handler for an event named
    /// `event`.
    pub fn is_core(&self, attribute: &str) -> bool {
        attribute == self.generic || attribute == self.params || attribute == self.callback
    }

    /// Event name an attribute opts into: `data-ice-custom-event` → `custom.event`.
    ///
    /// `None` for core attributes and attributes outside the family.
    pub fn event_for(&self, attribute: &str) -> Option<String> {
        if !self.is_prefixed(attribute) || self.is_core(attribute) {
            return None;
        }
        let key = data_key(attribute)?;
        let rest = key.strip_prefix(self.key_prefix.as_str())?;
        let event = uncamelize(rest, '.');
        (!event.is_empty()).then_some(event)
    }
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self::new("ice")
    }
}

/// Reads handler declarations from element attributes.
#[derive(Debug, Clone, Default)]
pub struct AttributeReader {
    names: AttributeNames,
}

impl AttributeReader {
    /// Create a reader for the given attribute names.
    pub fn new(names: AttributeNames) -> Self {
        Self { names }
    }

    /// The attribute names this reader uses.
    pub fn names(&self) -> &AttributeNames {
        &self.names
    }

    /// The declaration of `element` for `event_type`.
    ///
    /// The type-specific attribute wins over the generic one. `None` when
    /// neither yields a usable path.
    pub fn read<D: Document>(
        &self,
        doc: &D,
        element: ElementId,
        event_type: &str,
    ) -> Option<HandlerDeclaration> {
        let specific = self.names.for_event(event_type);
        let path = doc
            .attribute(element, &specific)
            .and_then(|value| declared_path(value, event_type))
            .or_else(|| {
                doc.attribute(element, &self.names.generic)
                    .and_then(|value| declared_path(value, event_type))
            })?;

        Some(HandlerDeclaration {
            path,
            args: self.args(doc, element),
        })
    }

    /// The arguments of `element`, `None` when absent or empty.
    pub fn args<D: Document>(&self, doc: &D, element: ElementId) -> Option<String> {
        doc.attribute(element, &self.names.params)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// The callback path of `element`, if it declares a usable one.
    pub fn callback_path<D: Document>(&self, doc: &D, element: ElementId) -> Option<HandlerPath> {
        let path = HandlerPath::parse(doc.attribute(element, &self.names.callback)?);
        (!path.is_empty()).then_some(path)
    }
}

/// The path a value declares for `event_type`.
///
/// `event|path` only counts for its own event; a bare path counts for any.
fn declared_path(value: &str, event_type: &str) -> Option<HandlerPath> {
    let path = match value.split_once(PIPE) {
        Some((event, path)) if event.trim() == event_type => path,
        Some(_) => return None,
        None => value,
    };
    let path = HandlerPath::parse(path);
    (!path.is_empty()).then_some(path)
}
