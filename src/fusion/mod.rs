//! Track fusion: the union-find forest and the tracks builder.
//!
//! This is the write side of the crate. [`TracksBuilder`] runs the three
//! batch phases (build, filter, export) and owns the forest for its
//! whole lifetime. Everything downstream works on the exported
//! [`TracksMap`](crate::core::TracksMap) through the
//! [`query`](crate::query) module.

mod builder;
mod union_find;

pub use builder::{FilterReport, TracksBuilder};
pub use union_find::{NodeHandle, UnionFind};
