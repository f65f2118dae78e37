use thiserror::Error;

/// Validation failures raised at construction time.
///
/// These are configuration errors, not runtime conditions: once a grid and
/// engine have been built successfully, no game operation can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A grid parameter (cell size, rows or cols) was zero or negative
    #[error("invalid grid dimension: cell_size={cell_size}, rows={rows}, cols={cols} (all must be > 0)")]
    InvalidDimension {
        cell_size: i32,
        rows: i32,
        cols: i32,
    },

    /// The requested snake length does not fit the grid
    #[error("invalid snake length {length}: must be between 2 and the number of columns ({cols})")]
    InvalidSnakeLength { length: usize, cols: i32 },
}
