use super::direction::Direction;
use super::error::GameError;
use super::grid::Grid;
use super::snake::{Position, Snake};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No heading set; nothing moved
    Idle,
    /// The move would have left the board; movement was suppressed
    Blocked,
    /// The snake advanced one cell
    Moved,
}

/// The game engine: owns the live snake state and advances it one step
/// per invocation.
///
/// There is no terminal state. A step into a wall is silently suppressed,
/// and self-collision is only ever reported through the advisory queries —
/// the orchestration layer uses them to gate input, the engine never ends
/// the game on its own.
pub struct SnakeEngine {
    grid: Grid,
    snake: Snake,
    initial_length: usize,
    heading: Option<Direction>,
    version: u64,
}

impl SnakeEngine {
    /// Create an engine with `initial_length` segments centered on the
    /// middle row, stationary until a direction is set.
    pub fn new(grid: Grid, initial_length: usize) -> Result<Self, GameError> {
        if initial_length < 2 || initial_length as i32 > grid.cols() {
            return Err(GameError::InvalidSnakeLength {
                length: initial_length,
                cols: grid.cols(),
            });
        }

        Ok(Self {
            grid,
            snake: Snake::centered(&grid, initial_length),
            initial_length,
            heading: None,
            version: 0,
        })
    }

    /// Put the snake back in its starting layout with no heading
    pub fn reset(&mut self) {
        self.snake = Snake::centered(&self.grid, self.initial_length);
        self.heading = None;
        self.version += 1;
    }

    /// Request a new heading.
    ///
    /// A request for the exact reverse of the current heading is ignored,
    /// so the snake can never be turned back into its own neck. Returns
    /// whether the heading actually changed.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if let Some(current) = self.heading {
            if current.is_opposite(direction) {
                return false;
            }
        }

        if self.heading == Some(direction) {
            return false;
        }

        self.heading = Some(direction);
        self.version += 1;
        true
    }

    /// Advance the snake one cell in its current heading.
    ///
    /// With no heading set this is a no-op. A move that would leave the
    /// board is suppressed and leaves every segment in place. A successful
    /// move shifts each segment to its predecessor's position and puts the
    /// head one cell further along; the snake's length never changes.
    pub fn step(&mut self) -> StepOutcome {
        let Some(direction) = self.heading else {
            return StepOutcome::Idle;
        };

        let candidate = self.snake.head().stepped(direction, self.grid.cell_size());

        if self.is_out_of_bounds(candidate) {
            return StepOutcome::Blocked;
        }

        self.snake.advance(candidate);
        self.version += 1;
        StepOutcome::Moved
    }

    /// True iff the position lies outside the board extent
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        pos.x < 0 || pos.x >= self.grid.width() || pos.y < 0 || pos.y >= self.grid.height()
    }

    /// Advisory self-collision query: true iff the position coincides with
    /// a body segment (the head itself is excluded)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.snake.collides_with_body(pos)
    }

    /// Whether a one-cell move in `direction` is currently sensible: it
    /// stays on the board, does not land on the body, and is not a
    /// reversal of the current heading.
    ///
    /// This is the predicate the front end uses to gate direction input,
    /// mirroring the advisory (never enforcing) collision model.
    pub fn can_move(&self, direction: Direction) -> bool {
        if let Some(current) = self.heading {
            if current.is_opposite(direction) {
                return false;
            }
        }

        let candidate = self.snake.head().stepped(direction, self.grid.cell_size());
        !self.is_out_of_bounds(candidate) && !self.collides_with_body(candidate)
    }

    /// Read-only view of the segment positions, head first
    pub fn segments(&self) -> &[Position] {
        self.snake.segments()
    }

    /// The head position
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    /// Current heading, `None` while stationary
    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    /// Monotonic change counter, bumped on every effective mutation.
    ///
    /// The renderer compares versions to detect that the state it last
    /// drew is stale; the mutable segment storage itself is never exposed.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
