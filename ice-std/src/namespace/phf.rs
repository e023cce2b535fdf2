//! PHF-backed handler table.
//!
//! Provides compile-time perfect hash lookup of plain functions. The table
//! is immutable and must be constructed from a static map reference.

use ice_core::{Call, HandlerPath, Receiver, Resolve, ResolvedHandler};
use std::sync::Arc;

/// A resolver over a static `phf::Map` of dotted paths to functions.
///
/// ```rust,ignore
/// static HANDLERS: phf::Map<&'static str, fn(Call<'_>)> = phf::phf_map! {
///     "math.square" => square,
/// };
/// let table = PhfTable::new(&HANDLERS);
/// ```
pub struct PhfTable {
    map: &'static phf::Map<&'static str, fn(Call<'_>)>,
}

impl PhfTable {
    /// Create a table from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, fn(Call<'_>)>) -> Self {
        Self { map }
    }

    /// Get the number of handlers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Resolve for PhfTable {
    fn resolve(&self, path: &HandlerPath) -> Option<ResolvedHandler> {
        let f = *self.map.get(path.to_string().as_str())?;
        Some(ResolvedHandler::new(Arc::new(f), Receiver::Global))
    }
}
