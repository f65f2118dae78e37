use serde::{Deserialize, Serialize};

use super::engine::SnakeEngine;
use super::error::GameError;
use super::grid::Grid;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pixel size of one grid cell
    pub cell_size: i32,
    /// Number of rows in the grid
    pub rows: i32,
    /// Number of columns in the grid
    pub cols: i32,
    /// Initial length of the snake, in segments
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 50,
            rows: 7,
            cols: 7,
            initial_length: 5,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// A small grid for tests
    pub fn small() -> Self {
        Self {
            cell_size: 10,
            rows: 5,
            cols: 5,
            initial_length: 2,
        }
    }

    /// Validate the configuration and build the engine from it.
    ///
    /// All parameter checking happens here, once; a successfully built
    /// engine can never fail afterwards.
    pub fn build(&self) -> Result<SnakeEngine, GameError> {
        let grid = Grid::new(self.cell_size, self.rows, self.cols)?;
        SnakeEngine::new(grid, self.initial_length)
    }
}
