use super::direction::Direction;
use super::grid::Grid;

/// A position on the game board, in pixel units.
///
/// Valid positions are always multiples of the grid's cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The position one cell away in a direction
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_size, dy * cell_size)
    }
}

/// The snake's body: an ordered sequence of segments, head at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// Lay out `length` segments horizontally, centered on the middle row.
    ///
    /// Segment `i` sits at `((cols + length - 1) / 2 - i) * cell_size`,
    /// clamped at the left edge; every segment shares the middle-row y.
    /// The caller is responsible for having validated `length` against the
    /// grid width.
    pub fn centered(grid: &Grid, length: usize) -> Self {
        let cell = grid.cell_size();
        let y = (grid.rows() / 2) * cell;

        let body = (0..length as i32)
            .map(|i| {
                let x = ((grid.cols() + length as i32 - 1) / 2 - i) * cell;
                Position::new(x.max(0), y)
            })
            .collect();

        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All segments in order, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Body segments excluding the head
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if a position coincides with any body segment (head excluded)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Advance the snake: each segment takes its predecessor's place,
    /// tail first, then the head moves to `new_head`. In place, O(length).
    pub fn advance(&mut self, new_head: Position) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = new_head;
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
