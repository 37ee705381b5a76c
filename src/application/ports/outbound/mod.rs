//! Outbound ports - Interfaces that the application requires from external systems

mod save_port;

pub use save_port::{SaveError, SaveRepositoryPort, SaveSlot, SaveSlotSummary};
