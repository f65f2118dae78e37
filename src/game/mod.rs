//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies: the grid geometry, the snake's segment state and the
//! per-tick movement and collision rules.

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{SnakeEngine, StepOutcome};
pub use error::GameError;
pub use grid::{Grid, GridLine, LineStyle};
pub use snake::{Position, Snake};
