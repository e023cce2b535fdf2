//! Flat handler table.
//!
//! Keys are complete dotted paths. No segment skipping, no receivers: a
//! declaration resolves only if its path is a key, and the handler always
//! runs with [`Receiver::Global`].

use super::split_path;
use ice_core::{Handler, HandlerPath, NamespaceError, Receiver, Resolve, ResolvedHandler};
use std::{collections::HashMap, sync::Arc};

/// A resolver backed by `HashMap<String, Handler>`.
#[derive(Clone, Default)]
pub struct HandlerTable {
    map: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerTable {
    /// Start building a table.
    pub fn builder() -> HandlerTableBuilder {
        HandlerTableBuilder::default()
    }

    /// Get the number of handlers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Check if a path is registered.
    pub fn contains(&self, path: &str) -> bool {
        self.map.contains_key(path)
    }
}

impl Resolve for HandlerTable {
    fn resolve(&self, path: &HandlerPath) -> Option<ResolvedHandler> {
        if path.is_empty() {
            return None;
        }
        self.map
            .get(&path.to_string())
            .map(|handler| ResolvedHandler::new(handler.clone(), Receiver::Global))
    }
}

/// Builder for [`HandlerTable`].
#[derive(Default)]
pub struct HandlerTableBuilder {
    map: HashMap<String, Arc<dyn Handler>>,
    allow_duplicates: bool,
}

impl HandlerTableBuilder {
    /// Allow duplicate paths (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Register a handler under a dotted path.
    pub fn insert<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), NamespaceError> {
        let key = split_path(path)?.join(".");
        if !self.allow_duplicates && self.map.contains_key(&key) {
            return Err(NamespaceError::Duplicate(key));
        }
        self.map.insert(key, Arc::new(handler));
        Ok(())
    }

    /// Register a handler (builder style).
    pub fn with<H: Handler>(mut self, path: &str, handler: H) -> Result<Self, NamespaceError> {
        self.insert(path, handler)?;
        Ok(self)
    }

    /// Finish the table.
    pub fn build(self) -> HandlerTable {
        HandlerTable { map: self.map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingHandler;
    use ice_core::ElementId;

    #[test]
    fn test_exact_lookup() {
        let run = CountingHandler::new();
        let table = HandlerTable::builder()
            .with("app.run", run.clone())
            .unwrap()
            .build();

        assert_eq!(table.len(), 1);
        let resolved = table.resolve(&HandlerPath::parse("app . run")).unwrap();
        assert!(resolved.receiver().is_global());
        resolved.invoke(None, ElementId(0), None);
        assert_eq!(run.count(), 1);

        // No segment skipping.
        assert!(table.resolve(&HandlerPath::parse("app.x.run")).is_none());
        assert!(table.resolve(&HandlerPath::parse("app")).is_none());
    }

    #[test]
    fn test_duplicate_path_error() {
        let mut builder = HandlerTable::builder();
        builder.insert("app.run", CountingHandler::new()).unwrap();

        let result = builder.insert("app.run", CountingHandler::new());
        assert_eq!(result, Err(NamespaceError::Duplicate("app.run".into())));
    }

    #[test]
    fn test_allow_duplicates() {
        let first = CountingHandler::new();
        let second = CountingHandler::new();
        let mut builder = HandlerTable::builder().allow_duplicates();
        builder.insert("app.run", first.clone()).unwrap();
        builder.insert("app.run", second.clone()).unwrap();

        let table = builder.build();
        table
            .resolve(&HandlerPath::parse("app.run"))
            .unwrap()
            .invoke(None, ElementId(0), None);
        assert_eq!((first.count(), second.count()), (0, 1));
    }
}
