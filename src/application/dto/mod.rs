//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize session state without the domain knowing about it.

pub mod game;

pub use game::*;
