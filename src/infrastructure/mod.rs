//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Catalog loader: JSON content files for characters, events and items
//! - Persistence: SQLite and in-memory save slot storage
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state

pub mod catalog_loader;
pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
