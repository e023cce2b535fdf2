//! # Handler
//!
//! The terminal endpoint of a dispatch. A handler receives a [`Call`]: the
//! declared arguments, the element that matched the delegated selector, the
//! raw event and the receiver the resolver settled on.
//!
//! # Usage Patterns
//!
//! 1. **Plain function or closure**: `fn greet(call: Call<'_>) { ... }`
//! 2. **Struct implementation**: `impl Handler for MyHandler`
//! 3. **Method of a stateful container**: [`Method`] downcasts the receiver
//!    before calling.
//!
//! The return value of a handler is never consulted.

use crate::{
    context::{ExtractError, FromArgs, Receiver},
    document::ElementId,
    event::Event,
};
use std::{any::Any, marker::PhantomData};

/// The values passed to a handler.
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
    receiver: &'a Receiver,
    args: Option<&'a str>,
    element: ElementId,
    event: Option<&'a Event>,
}

impl<'a> Call<'a> {
    /// Assemble a call.
    pub fn new(
        receiver: &'a Receiver,
        args: Option<&'a str>,
        element: ElementId,
        event: Option<&'a Event>,
    ) -> Self {
        Self {
            receiver,
            args,
            element,
            event,
        }
    }

    /// The invocation context.
    pub fn receiver(&self) -> &'a Receiver {
        self.receiver
    }

    /// The declared arguments, `None` when the element declares none.
    pub fn args(&self) -> Option<&'a str> {
        self.args
    }

    /// The element the delegated selector matched.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The raw event. `None` for callback invocations.
    pub fn event(&self) -> Option<&'a Event> {
        self.event
    }

    /// Parse the arguments.
    pub fn extract<T: FromArgs>(&self) -> Result<T, ExtractError> {
        T::from_args(self.args)
    }
}

/// A callable reachable from a handler directory.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an Ice handler",
    label = "missing `Handler` implementation",
    note = "Handlers are `Fn(Call<'_>)` closures or types implementing `Handler::call`."
)]
pub trait Handler: Send + Sync + 'static {
    /// Run the handler.
    fn call(&self, call: Call<'_>);
}

// Blanket impl for closures and functions
impl<F> Handler for F
where
    F: Fn(Call<'_>) + Send + Sync + 'static,
{
    fn call(&self, call: Call<'_>) {
        (self)(call)
    }
}

/// Pin a closure to the handler signature.
///
/// Closures passed straight to a generic `H: Handler` parameter need an
/// explicit `Call<'_>` annotation; this does it for them.
pub fn handler_fn<F>(f: F) -> F
where
    F: Fn(Call<'_>) + Send + Sync + 'static,
{
    f
}

/// A handler that runs against the state of its receiver.
///
/// When the resolved receiver is not an instance of `T` the call is a no-op,
/// the same as an unresolvable path.
pub struct Method<T, F> {
    f: F,
    _state: PhantomData<fn(&T)>,
}

impl<T, F> Method<T, F>
where
    T: Any + Send + Sync,
    F: Fn(&T, Call<'_>) + Send + Sync + 'static,
{
    /// Wrap a method body.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _state: PhantomData,
        }
    }
}

impl<T, F> Handler for Method<T, F>
where
    T: Any + Send + Sync,
    F: Fn(&T, Call<'_>) + Send + Sync + 'static,
{
    fn call(&self, call: Call<'_>) {
        if let Some(state) = call.receiver().downcast::<T>() {
            (self.f)(state, call)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::InstanceRef;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_closure_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handler = handler_fn(move |call| {
            sink.lock().unwrap().push(call.extract::<i64>().unwrap());
        });

        let event = Event::new("click", ElementId(2));
        handler.call(Call::new(&Receiver::Global, Some("4"), ElementId(2), Some(&event)));
        assert_eq!(*seen.lock().unwrap(), vec![4]);
    }

    #[test]
    fn test_method_requires_matching_receiver() {
        let method = Method::new(|hits: &AtomicUsize, _call: Call<'_>| {
            hits.fetch_add(1, Ordering::SeqCst);
        });

        let state = Arc::new(AtomicUsize::new(0));
        let receiver = Receiver::Instance(InstanceRef::new("clicks", state.clone()));
        method.call(Call::new(&receiver, None, ElementId(0), None));
        method.call(Call::new(&Receiver::Global, None, ElementId(0), None));

        assert_eq!(state.load(Ordering::SeqCst), 1);
    }
}
