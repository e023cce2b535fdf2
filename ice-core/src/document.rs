//! # Document contract
//!
//! Ice never owns the DOM. The host (a browser binding, a server-side
//! renderer, a test fixture) exposes its tree through [`Document`], and the
//! registry, the attribute reader and the dispatcher only ever read through
//! it.

/// Opaque handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Raw index of the element.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Read access to the host document.
///
/// Every method is a query; nothing in Ice mutates the document.
pub trait Document {
    /// All elements, in document order.
    fn elements(&self) -> impl Iterator<Item = ElementId> + '_;

    /// Lower-case tag name of the element, or `None` for a stale handle.
    fn tag_name(&self, element: ElementId) -> Option<&str>;

    /// Value of an attribute, if present.
    fn attribute(&self, element: ElementId, name: &str) -> Option<&str>;

    /// Names of every attribute present on the element, in source order.
    fn attribute_names(&self, element: ElementId) -> impl Iterator<Item = &str> + '_;

    /// Parent element, `None` at the root.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// The live `disabled` property of the element.
    ///
    /// Hosts whose elements have no such property keep the default.
    fn disabled_property(&self, _element: ElementId) -> bool {
        false
    }

    /// Whether the attribute is present, regardless of its value.
    fn has_attribute(&self, element: ElementId, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    /// Disabled by property *or* by attribute.
    ///
    /// Script toggles often update only one of the two.
    fn is_disabled(&self, element: ElementId) -> bool {
        self.disabled_property(element) || self.has_attribute(element, "disabled")
    }

    /// The element followed by its ancestors, innermost first.
    fn propagation_path(&self, target: ElementId) -> Vec<ElementId> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }
}
