//! Configuration options of `Ice::init`.

mod common;

use common::{click, init, page};
use ice::{
    ConfigError, DomTree, Event, HookResult, Ice, IceConfig, IceError, Namespace, Syntax,
    testing::{CountingHandler, RecordingHook},
};

#[test]
fn test_default_action_is_kept_by_default() {
    let page = page();
    let ice = init(&page.doc, Namespace::new());

    let event = click(page.dangling);
    ice.handle_event(&page.doc, &event);
    assert!(!event.is_default_prevented());
}

#[test]
fn test_prevent_default_opt_in() {
    let page = page();
    let config = IceConfig::new().prevent_default(true);
    let ice = Ice::init(config, Namespace::new(), &page.doc).unwrap();

    let event = Event::new("submit", page.form);
    ice.handle_event(&page.doc, &event);
    assert!(event.is_default_prevented());

    // Events nobody declared a handler for are left alone.
    let event = click(page.field);
    ice.handle_event(&page.doc, &event);
    assert!(!event.is_default_prevented());
}

#[test]
fn test_piped_syntax() {
    let mut doc = DomTree::new();
    let root = doc.root();
    let alert = doc.element(
        root,
        "a",
        &[("data-ice", "click|alert"), ("data-ice-params", "HELLO WORLD!")],
    );
    let zoom = doc.element(root, "a", &[("data-ice", "dblclick|x")]);

    let alert_handler = CountingHandler::new();
    let x = CountingHandler::new();
    let ns = Namespace::new()
        .with("alert", alert_handler.clone())
        .unwrap()
        .with("x", x.clone())
        .unwrap();
    let ice = Ice::init(IceConfig::new().with_syntax(Syntax::Piped), ns, &doc).unwrap();

    ice.handle_event(&doc, &click(alert));
    ice.handle_event(&doc, &click(zoom));
    assert_eq!((alert_handler.count(), x.count()), (1, 0));

    ice.handle_event(&doc, &Event::new("dblclick", zoom));
    assert_eq!(x.count(), 1);
}

#[test]
fn test_hooks_run_in_order_and_can_stop() {
    let page = page();
    let validate = CountingHandler::new();
    let observer = RecordingHook::new();
    let gate = RecordingHook::with_result(HookResult::Stop);
    let ice = Ice::init(
        IceConfig::new()
            .with_logging()
            .with_hook(observer.clone())
            .with_hook(gate.clone()),
        Namespace::new().with("validate", validate.clone()).unwrap(),
        &page.doc,
    )
    .unwrap();

    ice.handle_event(&page.doc, &Event::new("submit", page.form));
    assert_eq!(observer.elements(), [page.form]);
    assert_eq!(gate.count(), 1);
    assert_eq!(validate.count(), 0);
}

#[test]
fn test_invalid_configuration() {
    let doc = DomTree::new();

    let err = Ice::init(IceConfig::new().with_prefix("Ice"), Namespace::new(), &doc)
        .err()
        .unwrap();
    assert!(matches!(err, IceError::Config(ConfigError::InvalidPrefix(_))));

    let err = Ice::init(
        IceConfig::new().with_default_binding("focus", "input[data-ice=]"),
        Namespace::new(),
        &doc,
    )
    .err()
    .unwrap();
    assert!(matches!(err, IceError::Selector(_)));
}
