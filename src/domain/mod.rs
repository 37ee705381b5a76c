//! Domain layer - Core game logic with no I/O
//!
//! This layer contains:
//! - Entities: PlayerState, Character, GameEvent, Item
//! - Value Objects: ids, stats, affection, activities, endings
//! - Aggregates: the static content catalog
//! - Domain Services: the pure progression engine

pub mod aggregates;
pub mod entities;
pub mod services;
pub mod value_objects;
