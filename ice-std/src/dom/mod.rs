//! In-memory document.
//!
//! An arena tree implementing [`Document`](ice_core::Document), for hosts
//! that render HTML without a browser and for exercising delegation in
//! tests.

mod tree;

pub use tree::{DomTree, Node};
