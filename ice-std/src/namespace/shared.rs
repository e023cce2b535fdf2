//! A namespace that stays mutable after initialization.
//!
//! Handlers are looked up at event time, so anything defined here after
//! `Ice::init` is picked up by the next dispatch.

use super::{Instance, Member, Namespace};
use ice_core::{Handler, HandlerPath, NamespaceError, Resolve, ResolvedHandler};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to a [`Namespace`] behind a lock.
///
/// Clones share the same namespace.
#[derive(Clone, Default)]
pub struct SharedNamespace {
    inner: Arc<RwLock<Namespace>>,
}

impl SharedNamespace {
    /// Create an empty shared namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing namespace.
    pub fn from_namespace(ns: Namespace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ns)),
        }
    }

    /// Define (or redefine) a handler.
    pub fn define<H: Handler>(&self, path: &str, handler: H) -> Result<(), NamespaceError> {
        self.write().insert(path, handler)
    }

    /// Define (or redefine) a stateful instance.
    pub fn define_instance(&self, path: &str, instance: Instance) -> Result<(), NamespaceError> {
        self.write().insert_instance(path, instance)
    }

    /// Remove the entry at `path`.
    pub fn remove(&self, path: &str) -> Option<Member> {
        self.write().remove(path)
    }

    /// Copy of the current namespace.
    pub fn snapshot(&self) -> Namespace {
        self.read().clone()
    }

    // No writer panics while holding the lock. Poisoning is recovered
    // anyway and the guard used as-is.
    fn read(&self) -> RwLockReadGuard<'_, Namespace> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Namespace> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Resolve for SharedNamespace {
    fn resolve(&self, path: &HandlerPath) -> Option<ResolvedHandler> {
        self.read().resolve(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingHandler;
    use ice_core::ElementId;

    #[test]
    fn test_late_definition_is_visible() {
        let shared = SharedNamespace::new();
        let view = shared.clone();
        let path = HandlerPath::parse("app.late");
        assert!(view.resolve(&path).is_none());

        let late = CountingHandler::new();
        shared.define("app.late", late.clone()).unwrap();
        view.resolve(&path).unwrap().invoke(None, ElementId(0), None);
        assert_eq!(late.count(), 1);

        assert!(shared.remove("app.late").is_some());
        assert!(view.resolve(&path).is_none());
    }

    #[test]
    fn test_redefinition_replaces() {
        let first = CountingHandler::new();
        let second = CountingHandler::new();
        let shared = SharedNamespace::new();
        let path = HandlerPath::parse("app.run");

        shared.define("app.run", first.clone()).unwrap();
        let before = shared.resolve(&path).unwrap();
        shared.define("app.run", second.clone()).unwrap();
        let after = shared.resolve(&path).unwrap();

        before.invoke(None, ElementId(0), None);
        after.invoke(None, ElementId(0), None);
        assert_eq!((first.count(), second.count()), (1, 1));
        assert_eq!(shared.snapshot().len(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let shared = SharedNamespace::new();
        let poisoner = shared.clone();
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the namespace lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(shared.inner.is_poisoned());

        let handler = CountingHandler::new();
        shared.define("app.run", handler.clone()).unwrap();
        shared
            .resolve(&HandlerPath::parse("app.run"))
            .unwrap()
            .invoke(None, ElementId(0), None);
        assert_eq!(handler.count(), 1);
    }
}
