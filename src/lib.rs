//! Grid Snake - a classic grid-based snake game with a terminal front end
//!
//! This library provides:
//! - Core game logic: grid geometry, snake movement and collision queries
//!   (game module)
//! - Key event mapping (input module)
//! - TUI rendering of the grid lines and snake segments (render module)
//! - Session bookkeeping (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
