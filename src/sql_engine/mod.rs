//! SQL text to catalog extraction engine
//!
//! Data flows one way: raw text, normalized text, pass matches, per-file
//! catalog, merged catalog, reconciled groupings. Nothing here performs I/O.

pub mod catalog;
pub mod extractors;
pub mod normalizer;
pub mod reconcile;

pub use catalog::{Catalog, Relationship};
pub use reconcile::{reconcile, ColumnRelationship, Reconciliation, TableDbPair};

#[cfg(test)]
mod tests;
