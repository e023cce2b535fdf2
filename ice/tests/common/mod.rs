#![allow(dead_code)]

use ice::{DomTree, ElementId, Event, Ice, IceConfig, Resolve};
use std::sync::{Arc, Mutex};

// ============================================================================
// Documents
// ============================================================================

/// The page used by most dispatch tests.
pub struct Page {
    pub doc: DomTree,
    /// `<button data-ice="greet.sayHello" data-ice-params="world">`
    pub greet: ElementId,
    /// `<i>` inside the greet button.
    pub icon: ElementId,
    /// `<button data-ice="math.square" data-ice-params="4">`
    pub square: ElementId,
    /// `<a data-ice="app.open" data-ice-dblclick="app.zoom" data-ice-custom-event="app.custom">`
    pub link: ElementId,
    /// `<form data-ice="validate">`
    pub form: ElementId,
    /// `<input>` inside the form.
    pub field: ElementId,
    /// `<a data-ice="nothing.here">`
    pub dangling: ElementId,
}

pub fn page() -> Page {
    let mut doc = DomTree::new();
    let body = doc.element(doc.root(), "body", &[]);

    let greet = doc.element(
        body,
        "button",
        &[("data-ice", "greet.sayHello"), ("data-ice-params", "world")],
    );
    let icon = doc.element(greet, "i", &[]);
    let square = doc.element(
        body,
        "button",
        &[("data-ice", "math.square"), ("data-ice-params", "4")],
    );
    let link = doc.element(
        body,
        "a",
        &[
            ("data-ice", "app.open"),
            ("data-ice-dblclick", "app.zoom"),
            ("data-ice-custom-event", "app.custom"),
        ],
    );
    let form = doc.element(body, "form", &[("data-ice", "validate")]);
    let field = doc.element(form, "input", &[("name", "email")]);
    let dangling = doc.element(body, "a", &[("data-ice", "nothing.here")]);

    Page {
        doc,
        greet,
        icon,
        square,
        link,
        form,
        field,
        dangling,
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn init<R: Resolve>(doc: &DomTree, resolver: R) -> Ice<R> {
    Ice::init(IceConfig::new(), resolver, doc).unwrap()
}

pub fn click(target: ElementId) -> Event {
    Event::new("click", target)
}

/// A shared log handlers can push into.
#[derive(Clone, Default)]
pub struct Log<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> Log<T> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, entry: T) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<T> {
        self.entries.lock().unwrap().clone()
    }
}
