//! Application services - Use case implementations
//!
//! The session service sequences the progression engine; the save service
//! moves session snapshots in and out of the persistence port.

pub mod game_session_service;
pub mod save_service;

pub use game_session_service::{GameError, GameSessionService};
pub use save_service::{SaveService, SAVE_FORMAT_VERSION};
