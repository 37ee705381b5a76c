//! Aggregates - Cluster of domain objects treated as a single unit

pub mod catalog_aggregate;

pub use catalog_aggregate::{CatalogAggregate, CatalogError};
