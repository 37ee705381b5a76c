//! Save slot persistence adapters
//!
//! SQLite is used when a database URL is configured; otherwise saves live
//! in process memory for the lifetime of the server.

mod memory_save_repository;
mod sqlite_save_repository;

pub use memory_save_repository::InMemorySaveRepository;
pub use sqlite_save_repository::SqliteSaveRepository;
