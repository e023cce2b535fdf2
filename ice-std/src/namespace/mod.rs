//! # Name Resolver
//!
//! Handler directories the host injects into Ice.
//!
//! | Directory | Use Case | Receiver |
//! |-----------|----------|----------|
//! | [`Namespace`] | Nested namespaces and stateful instances | Innermost instance |
//! | [`SharedNamespace`] | Handlers (re)defined after initialization | Innermost instance |
//! | [`HandlerTable`] | Flat `"a.b.c"` lookup table | Always global |
//! | `PhfTable` (feature `phf`) | Compile-time table of plain functions | Always global |
//!
//! With the `inventory` feature, handlers submitted as `CollectedHandler`
//! anywhere in the binary can be gathered into a [`Namespace`].

mod shared;
mod table;
mod tree;

#[cfg(feature = "inventory")]
mod collected;
#[cfg(feature = "phf")]
mod phf;

pub use shared::SharedNamespace;
pub use table::{HandlerTable, HandlerTableBuilder};
pub use tree::{Instance, Member, Namespace};

#[cfg(feature = "inventory")]
pub use collected::{CollectedHandler, collected};
#[cfg(feature = "phf")]
pub use self::phf::PhfTable;

use ice_core::NamespaceError;

/// Split a registration path, rejecting empty segments.
pub(crate) fn split_path(path: &str) -> Result<Vec<String>, NamespaceError> {
    if path.trim().is_empty() {
        return Err(NamespaceError::EmptyPath);
    }
    path.split('.')
        .map(|segment| {
            let segment = segment.trim();
            if segment.is_empty() {
                Err(NamespaceError::EmptySegment(path.to_string()))
            } else {
                Ok(segment.to_string())
            }
        })
        .collect()
}
