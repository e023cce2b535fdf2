//! Link-time handler registration via `inventory`.

use super::Namespace;
use ice_core::{Call, NamespaceError};

/// Registration entry for a handler defined anywhere in the binary.
///
/// ```rust,ignore
/// fn square(call: Call<'_>) { /* ... */ }
///
/// inventory::submit! {
///     CollectedHandler::new("math.square", square)
/// }
/// ```
pub struct CollectedHandler {
    /// Dotted path the handler is registered under.
    pub path: &'static str,
    /// The handler function.
    pub handler: fn(Call<'_>),
}

impl CollectedHandler {
    /// Create a registration entry.
    pub const fn new(path: &'static str, handler: fn(Call<'_>)) -> Self {
        Self { path, handler }
    }
}

inventory::collect!(CollectedHandler);

/// Build a namespace from every submitted [`CollectedHandler`].
///
/// Submission order is unspecified, so two entries under the same path
/// leave an arbitrary winner.
pub fn collected() -> Result<Namespace, NamespaceError> {
    let mut ns = Namespace::new();
    for entry in inventory::iter::<CollectedHandler> {
        ns.insert(entry.path, entry.handler)?;
    }
    Ok(ns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ice_core::{ElementId, HandlerPath, Resolve};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static PINGS: AtomicUsize = AtomicUsize::new(0);

    fn ping(_call: Call<'_>) {
        PINGS.fetch_add(1, Ordering::SeqCst);
    }

    inventory::submit! {
        CollectedHandler::new("collected.ping", ping)
    }

    #[test]
    fn test_collected_handlers_resolve() {
        let ns = collected().unwrap();
        ns.resolve(&HandlerPath::parse("collected.ping"))
            .unwrap()
            .invoke(None, ElementId(0), None);
        assert_eq!(PINGS.load(Ordering::SeqCst), 1);
    }
}
