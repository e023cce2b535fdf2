//! Event registry construction through `Ice::init`.

mod common;

use common::{init, page};
use ice::{
    DomTree, Event, Ice, IceConfig, Namespace,
    testing::{CountingHandler, RecordingHandler},
};

#[test]
fn test_events_to_listen_on() {
    let page = page();
    let ice = init(&page.doc, Namespace::new());
    assert_eq!(
        ice.events().collect::<Vec<_>>(),
        ["click", "change", "submit", "dblclick", "custom.event"]
    );
    assert_eq!(ice.dispatcher().listeners().len(), ice.bindings().len());
}

#[test]
fn test_same_custom_event_binds_once() {
    let mut doc = DomTree::new();
    let root = doc.root();
    let first = doc.element(root, "span", &[("data-ice-custom-event", "app.first")]);
    let second = doc.element(root, "p", &[("data-ice-custom-event", "app.second")]);

    let first_handler = CountingHandler::new();
    let second_handler = CountingHandler::new();
    let ns = Namespace::new()
        .with("app.first", first_handler.clone())
        .unwrap()
        .with("app.second", second_handler.clone())
        .unwrap();
    let ice = init(&doc, ns);

    let custom: Vec<_> = ice.events().filter(|e| *e == "custom.event").collect();
    assert_eq!(custom.len(), 1);

    // The single binding still delegates for both elements.
    ice.handle_event(&doc, &Event::new("custom.event", first));
    ice.handle_event(&doc, &Event::new("custom.event", second));
    assert_eq!((first_handler.count(), second_handler.count()), (1, 1));
}

#[test]
fn test_dash_digit_attribute_is_delegated() {
    let mut doc = DomTree::new();
    let root = doc.root();
    let step = doc.element(root, "span", &[("data-ice-step-2", "app.step")]);
    let named = doc.element(root, "span", &[("data-ice-event", "app.event")]);

    let step_handler = CountingHandler::new();
    let event_handler = CountingHandler::new();
    let ns = Namespace::new()
        .with("app.step", step_handler.clone())
        .unwrap()
        .with("app.event", event_handler.clone())
        .unwrap();
    let ice = init(&doc, ns);

    assert_eq!(
        ice.events().collect::<Vec<_>>(),
        ["click", "change", "submit", "step-2", "event"]
    );

    let outcome = ice.handle_event(&doc, &Event::new("step-2", step));
    assert_eq!((outcome.matched, outcome.invoked), (1, 1));
    ice.handle_event(&doc, &Event::new("event", named));
    assert_eq!((step_handler.count(), event_handler.count()), (1, 1));
}

#[test]
fn test_dash_digit_prefix() {
    let mut doc = DomTree::new();
    let root = doc.root();
    let button = doc.element(
        root,
        "button",
        &[("data-a-1", "app.run"), ("data-a-1-params", "7")],
    );

    let run = RecordingHandler::new();
    let ice = Ice::init(
        IceConfig::new().with_prefix("a-1"),
        Namespace::new().with("app.run", run.clone()).unwrap(),
        &doc,
    )
    .unwrap();

    ice.handle_event(&doc, &Event::new("click", button));
    assert_eq!(run.calls()[0].args.as_deref(), Some("7"));
}

#[test]
fn test_custom_prefix() {
    let mut doc = DomTree::new();
    let root = doc.root();
    let button = doc.element(
        root,
        "button",
        &[("data-act", "app.run"), ("data-act-params", "7")],
    );
    let other = doc.element(root, "button", &[("data-ice", "app.run")]);
    doc.element(root, "div", &[("data-act-hover", "app.run")]);

    let run = CountingHandler::new();
    let ice = Ice::init(
        IceConfig::new().with_prefix("act"),
        Namespace::new().with("app.run", run.clone()).unwrap(),
        &doc,
    )
    .unwrap();

    assert_eq!(
        ice.bindings()[0].selector().to_string(),
        "a[data-act], div[data-act], button[data-act]"
    );
    assert!(ice.events().any(|e| e == "hover"));

    ice.handle_event(&doc, &Event::new("click", button));
    ice.handle_event(&doc, &Event::new("click", other));
    assert_eq!(run.count(), 1);
}

#[test]
fn test_configured_binding_extends_default_table() {
    let mut doc = DomTree::new();
    let root = doc.root();
    let input = doc.element(root, "input", &[("data-ice", "form.touch")]);

    let touch = CountingHandler::new();
    let ice = Ice::init(
        IceConfig::new().with_default_binding("focus", "input[data-ice]"),
        Namespace::new().with("form.touch", touch.clone()).unwrap(),
        &doc,
    )
    .unwrap();

    assert_eq!(ice.bindings()[0].event(), "focus");
    ice.handle_event(&doc, &Event::new("focus", input).with_bubbles(false));
    assert_eq!(touch.count(), 1);
}
