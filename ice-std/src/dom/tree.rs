//! DOM tree (arena-based allocation)

use ice_core::{Document, ElementId};

/// An element node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Lower-case tag name.
    pub tag: String,
    /// Attributes in source order.
    pub attrs: Vec<(String, String)>,
    /// Live `disabled` property, independent of the attribute.
    pub disabled: bool,
    /// Parent element (`None` for the root and for detached nodes).
    pub parent: Option<ElementId>,
    /// Children in document order.
    pub children: Vec<ElementId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            disabled: false,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena-based element tree rooted at an `<html>` element.
///
/// Elements are created detached and only become part of the document once
/// appended under the root.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Root element ID.
    pub const ROOT: ElementId = ElementId(0);

    /// Create a tree holding only the root element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("html")],
        }
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        Self::ROOT
    }

    /// Get a node by ID.
    pub fn get(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(Node::new(tag));
        id
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    ///
    /// Appending an element under itself or one of its descendants is
    /// ignored.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child
            || self.get(parent).is_none()
            || self.get(child).is_none()
            || self.is_ancestor(child, parent)
        {
            return;
        }
        self.detach(child);
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    /// Remove `child` from its parent. Its subtree stays intact.
    pub fn detach(&mut self, child: ElementId) {
        let Some(parent) = self.get(child).and_then(|n| n.parent) else {
            return;
        };
        self.nodes[parent.index()].children.retain(|&c| c != child);
        self.nodes[child.index()].parent = None;
    }

    /// Create an element with attributes and append it under `parent`.
    pub fn element(&mut self, parent: ElementId, tag: &str, attrs: &[(&str, &str)]) -> ElementId {
        let id = self.create_element(tag);
        for (name, value) in attrs {
            self.set_attribute(id, name, value);
        }
        self.append_child(parent, id);
        id
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        let Some(node) = self.get_mut(id) else {
            return;
        };
        let name = name.to_ascii_lowercase();
        match node.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => node.attrs.push((name, value.to_string())),
        }
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        if let Some(node) = self.get_mut(id) {
            node.attrs.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        }
    }

    /// Set the live `disabled` property without touching the attribute.
    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(node) = self.get_mut(id) {
            node.disabled = disabled;
        }
    }

    /// Children of an element.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    fn is_ancestor(&self, ancestor: ElementId, of: ElementId) -> bool {
        let mut current = self.get(of).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|n| n.parent);
        }
        false
    }
}

impl Document for DomTree {
    fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        // Pre-order walk from the root; detached subtrees are not part of
        // the document.
        let mut stack = vec![Self::ROOT];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.children(id).iter().rev().copied());
            Some(id)
        })
    }

    fn tag_name(&self, element: ElementId) -> Option<&str> {
        self.get(element).map(|n| n.tag.as_str())
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.get(element)?
            .attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn attribute_names(&self, element: ElementId) -> impl Iterator<Item = &str> + '_ {
        self.get(element)
            .into_iter()
            .flat_map(|n| n.attrs.iter().map(|(name, _)| name.as_str()))
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.get(element)?.parent
    }

    fn disabled_property(&self, element: ElementId) -> bool {
        self.get(element).is_some_and(|n| n.disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order() {
        let mut doc = DomTree::new();
        let body = doc.element(doc.root(), "body", &[]);
        let form = doc.element(body, "form", &[]);
        let input = doc.element(form, "input", &[]);
        let footer = doc.element(body, "footer", &[]);
        let detached = doc.create_element("div");

        let order: Vec<_> = doc.elements().collect();
        assert_eq!(order, vec![doc.root(), body, form, input, footer]);
        assert!(!order.contains(&detached));
    }

    #[test]
    fn test_attributes_and_disabled() {
        let mut doc = DomTree::new();
        let button = doc.element(doc.root(), "BUTTON", &[("data-ice", "a.b")]);
        assert_eq!(doc.tag_name(button), Some("button"));
        assert_eq!(doc.attribute(button, "DATA-ICE"), Some("a.b"));

        doc.set_attribute(button, "data-ice", "c.d");
        assert_eq!(doc.attribute(button, "data-ice"), Some("c.d"));
        assert_eq!(doc.attribute_names(button).collect::<Vec<_>>(), ["data-ice"]);

        assert!(!doc.is_disabled(button));
        doc.set_disabled(button, true);
        assert!(doc.is_disabled(button));
        doc.set_disabled(button, false);
        doc.set_attribute(button, "disabled", "");
        assert!(doc.is_disabled(button));
        doc.remove_attribute(button, "disabled");
        assert!(!doc.is_disabled(button));
    }

    #[test]
    fn test_propagation_path_and_cycles() {
        let mut doc = DomTree::new();
        let body = doc.element(doc.root(), "body", &[]);
        let a = doc.element(body, "a", &[]);
        let span = doc.element(a, "span", &[]);

        assert_eq!(doc.propagation_path(span), vec![span, a, body, doc.root()]);

        doc.append_child(span, body);
        assert_eq!(doc.parent(body), Some(doc.root()));
    }
}
