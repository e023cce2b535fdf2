//! # Bootstrapper
//!
//! [`Ice::init`] validates the configuration, scans the document once to
//! build the [`EventRegistry`], then installs one delegated listener per
//! binding. The host attaches a single root listener for every name in
//! [`Ice::events`] and forwards what it receives to [`Ice::handle_event`].

use crate::config::IceConfig;
use ice_core::{Document, ElementId, Event, EventBinding, IceError, Resolve};
use ice_std::{AttributeReader, DispatchOutcome, Dispatcher, EventRegistry, PreventDefaultHook};

/// An initialized delegation layer.
pub struct Ice<R> {
    registry: EventRegistry,
    dispatcher: Dispatcher<R>,
}

impl<R: Resolve> Ice<R> {
    /// Build the registry from `doc` and install the listeners.
    ///
    /// Fails only on an invalid configuration; the document scan itself
    /// cannot fail.
    pub fn init<D: Document>(
        mut config: IceConfig,
        resolver: R,
        doc: &D,
    ) -> Result<Self, IceError> {
        config.validate()?;
        let names = config.attribute_names();
        let registry =
            EventRegistry::scan(doc, &names, config.syntax(), config.default_bindings()?);

        let mut dispatcher = Dispatcher::new(&registry, AttributeReader::new(names), resolver);
        if config.prevents_default() {
            dispatcher.push_hook(Box::new(PreventDefaultHook));
        }
        for hook in config.take_hooks() {
            dispatcher.push_hook(hook);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            prefix = config.prefix(),
            events = registry.len(),
            "Ice initialized"
        );

        Ok(Self {
            registry,
            dispatcher,
        })
    }

    /// The event names the host must listen to on its root.
    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.events()
    }

    /// The event bindings, in registration order.
    pub fn bindings(&self) -> &[EventBinding] {
        self.registry.bindings()
    }

    /// The registry built at initialization.
    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// The dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher<R> {
        &self.dispatcher
    }

    /// The resolver handlers are looked up in.
    pub fn resolver(&self) -> &R {
        self.dispatcher.resolver()
    }

    /// Body of the root listener: deliver an event raised in `doc`.
    pub fn handle_event<D: Document>(&self, doc: &D, event: &Event) -> DispatchOutcome {
        self.dispatcher.dispatch(doc, event)
    }

    /// Invoke the callback `element` declares, passing `params` and no event.
    ///
    /// Meant to be called by a handler once its own work is done. Returns
    /// whether a callback ran.
    pub fn callback<D: Document>(&self, doc: &D, element: ElementId, params: Option<&str>) -> bool {
        self.dispatcher.callback(doc, element, params)
    }
}
