use super::error::GameError;

/// Rendering style for one grid line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Border line on the outer edge of the grid
    Solid,
    /// Interior line strictly between the two borders
    Dashed,
}

/// A geometric line descriptor for one row or column boundary.
///
/// Coordinates are in pixel units; the display layer decides how a solid or
/// dashed line is actually drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLine {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub style: LineStyle,
}

impl GridLine {
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }
}

/// The game grid: cell size and dimensions, immutable once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_size: i32,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a grid, validating that every dimension is positive
    pub fn new(cell_size: i32, rows: i32, cols: i32) -> Result<Self, GameError> {
        if cell_size <= 0 || rows <= 0 || cols <= 0 {
            return Err(GameError::InvalidDimension {
                cell_size,
                rows,
                cols,
            });
        }

        Ok(Self {
            cell_size,
            rows,
            cols,
        })
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total board width in pixel units
    pub fn width(&self) -> i32 {
        self.cols * self.cell_size
    }

    /// Total board height in pixel units
    pub fn height(&self) -> i32 {
        self.rows * self.cell_size
    }

    /// Produce the static set of grid-line descriptors.
    ///
    /// Returns `cols + 1` vertical and `rows + 1` horizontal lines, each
    /// spanning the full grid extent. The first and last line on each axis
    /// are the solid border; everything in between is dashed. Deterministic:
    /// repeated calls yield the same sequence.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let mut lines = Vec::with_capacity((self.cols + self.rows + 2) as usize);

        for i in 0..=self.cols {
            let x = i * self.cell_size;
            lines.push(GridLine {
                x1: x,
                y1: 0,
                x2: x,
                y2: self.height(),
                style: if i == 0 || i == self.cols {
                    LineStyle::Solid
                } else {
                    LineStyle::Dashed
                },
            });
        }

        for i in 0..=self.rows {
            let y = i * self.cell_size;
            lines.push(GridLine {
                x1: 0,
                y1: y,
                x2: self.width(),
                y2: y,
                style: if i == 0 || i == self.rows {
                    LineStyle::Solid
                } else {
                    LineStyle::Dashed
                },
            });
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_construction() {
        let grid = Grid::new(50, 7, 7).unwrap();
        assert_eq!(grid.cell_size(), 50);
        assert_eq!(grid.width(), 350);
        assert_eq!(grid.height(), 350);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 7, 7),
            Err(GameError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::new(50, 0, 7),
            Err(GameError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::new(50, 7, -1),
            Err(GameError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_grid_line_count() {
        let grid = Grid::new(50, 7, 5).unwrap();
        let lines = grid.grid_lines();

        // cols + 1 vertical plus rows + 1 horizontal
        assert_eq!(lines.len(), (5 + 1) + (7 + 1));
        assert_eq!(lines.iter().filter(|l| l.is_vertical()).count(), 6);
        assert_eq!(lines.iter().filter(|l| l.is_horizontal()).count(), 8);
    }

    #[test]
    fn test_border_solid_interior_dashed() {
        let grid = Grid::new(10, 3, 3).unwrap();
        let lines = grid.grid_lines();

        let solid = lines
            .iter()
            .filter(|l| l.style == LineStyle::Solid)
            .count();
        let dashed = lines
            .iter()
            .filter(|l| l.style == LineStyle::Dashed)
            .count();

        // Two borders per axis; the rest are interior
        assert_eq!(solid, 4);
        assert_eq!(dashed, 4);

        for line in &lines {
            if line.is_vertical() {
                let border = line.x1 == 0 || line.x1 == grid.width();
                assert_eq!(line.style == LineStyle::Solid, border);
                assert_eq!((line.y1, line.y2), (0, grid.height()));
            } else {
                let border = line.y1 == 0 || line.y1 == grid.height();
                assert_eq!(line.style == LineStyle::Solid, border);
                assert_eq!((line.x1, line.x2), (0, grid.width()));
            }
        }
    }

    #[test]
    fn test_grid_lines_idempotent() {
        let grid = Grid::new(25, 4, 6).unwrap();
        assert_eq!(grid.grid_lines(), grid.grid_lines());
    }

    #[test]
    fn test_minimal_grid() {
        let grid = Grid::new(1, 1, 1).unwrap();
        let lines = grid.grid_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.style == LineStyle::Solid));
    }
}
