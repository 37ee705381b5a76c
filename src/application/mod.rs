//! Application layer - Use cases over the domain
//!
//! This layer contains:
//! - DTOs: request/response shapes for the HTTP boundary
//! - Ports: interfaces the application needs from infrastructure
//! - Services: the game session and save use cases

pub mod dto;
pub mod ports;
pub mod services;
