use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph,
        canvas::{Canvas, Line as CanvasLine, Rectangle},
    },
};

use crate::game::{Direction, LineStyle, SnakeEngine};
use crate::metrics::SessionMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, engine: &SnakeEngine, metrics: &SessionMetrics) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

        let stats = self.render_stats(engine, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the board horizontally
        let board_area = Layout::horizontal([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(chunks[1])[1];

        self.draw_board(frame, board_area, engine);

        let controls = self.render_controls(engine);
        frame.render_widget(controls, chunks[2]);
    }

    /// Paint the grid lines and snake segments on a canvas.
    ///
    /// Everything drawn here comes from the engine's read-only projections:
    /// the static grid-line descriptors and the segment snapshot. The
    /// canvas y axis grows upward while board coordinates grow downward,
    /// so y is flipped when painting.
    fn draw_board(&self, frame: &mut Frame, area: Rect, engine: &SnakeEngine) {
        let grid = *engine.grid();
        let width = grid.width() as f64;
        let height = grid.height() as f64;
        let cell = grid.cell_size() as f64;
        let segments = engine.segments();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for line in grid.grid_lines() {
                    // Dashing is not available on a terminal canvas; interior
                    // lines are drawn dimmer instead
                    let color = match line.style {
                        LineStyle::Solid => Color::Gray,
                        LineStyle::Dashed => Color::DarkGray,
                    };
                    ctx.draw(&CanvasLine {
                        x1: line.x1 as f64,
                        y1: height - line.y1 as f64,
                        x2: line.x2 as f64,
                        y2: height - line.y2 as f64,
                        color,
                    });
                }

                ctx.layer();

                // Segments are inset slightly so neighbouring cells stay
                // visually separate, like the original's 0.99-sized tiles
                let inset = cell * 0.05;
                for (i, seg) in segments.iter().enumerate() {
                    let color = if i == 0 { Color::LightGreen } else { Color::Green };
                    ctx.draw(&Rectangle {
                        x: seg.x as f64 + inset,
                        y: height - seg.y as f64 - cell + inset,
                        width: cell - 2.0 * inset,
                        height: cell - 2.0 * inset,
                        color,
                    });
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_stats(&self, engine: &SnakeEngine, metrics: &SessionMetrics) -> Paragraph<'_> {
        let heading = match engine.heading() {
            Some(Direction::Up) => "Up",
            Some(Direction::Down) => "Down",
            Some(Direction::Left) => "Left",
            Some(Direction::Right) => "Right",
            None => "-",
        };

        let text = vec![Line::from(vec![
            Span::styled("Heading: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                heading,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Moves: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.moves.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    /// The footer doubles as the original's direction buttons: an arrow is
    /// dimmed when a move that way is currently blocked by a wall, the
    /// snake's own body, or the no-reversal rule.
    fn render_controls(&self, engine: &SnakeEngine) -> Paragraph<'_> {
        let arrow = |dir: Direction, glyph: &'static str| {
            if engine.can_move(dir) {
                Span::styled(glyph, Style::default().fg(Color::Cyan))
            } else {
                Span::styled(
                    glyph,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            }
        };

        let text = vec![Line::from(vec![
            arrow(Direction::Up, "↑"),
            arrow(Direction::Down, "↓"),
            arrow(Direction::Left, "←"),
            arrow(Direction::Right, "→"),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
