//! Core game logic module for Snake
//!
//! This module contains all the world rules without any I/O or rendering
//! dependencies. Drivers call `World::set_direction` and `World::advance`
//! and read the state back to draw it.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, ParseDirectionError};
pub use config::{WorldConfig, MAX_SIDE};
pub use engine::{Collision, TickOutcome, World, WorldSnapshot, WorldStatus, APPLE_POINTS};
pub use error::{ConfigError, PlacementError};
pub use state::{Cage, Position, Snake};
