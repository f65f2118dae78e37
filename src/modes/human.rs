use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::debug;

use crate::game::{Direction, GameConfig, GameError, SnakeEngine, StepOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    engine: SnakeEngine,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    pub fn new(config: GameConfig, tick_interval: Duration) -> Result<Self, GameError> {
        let engine = config.build()?;

        Ok(Self {
            engine,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            should_quit: false,
            pending_direction: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Move(dir) => {
                    self.pending_direction = Some(dir);
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            // Drop requests the engine's gating predicate rejects; this is
            // the disabled-direction-button behavior of the front end
            if self.engine.can_move(dir) {
                self.engine.set_direction(dir);
            } else {
                debug!(?dir, "ignoring blocked direction request");
            }
        }

        match self.engine.step() {
            StepOutcome::Moved => self.metrics.on_move(),
            StepOutcome::Blocked => debug!(head = ?self.engine.head(), "movement suppressed at wall"),
            StepOutcome::Idle => {}
        }
    }

    fn reset_game(&mut self) {
        self.engine.reset();
        self.metrics.on_restart();
        self.pending_direction = None;
        debug!("game reset to initial layout");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn mode() -> HumanMode {
        HumanMode::new(GameConfig::default(), Duration::from_millis(125)).unwrap()
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.engine.segments().len(), 5);
        assert_eq!(mode.engine.heading(), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            initial_length: 1,
            ..Default::default()
        };
        assert!(HumanMode::new(config, Duration::from_millis(125)).is_err());
    }

    #[test]
    fn test_tick_applies_pending_direction() {
        let mut mode = mode();
        mode.pending_direction = Some(Direction::Up);

        mode.update_game();

        assert_eq!(mode.engine.heading(), Some(Direction::Up));
        assert_eq!(mode.engine.head(), Position::new(250, 100));
        assert_eq!(mode.metrics.moves, 1);
        assert_eq!(mode.pending_direction, None);
    }

    #[test]
    fn test_tick_without_input_is_stationary() {
        let mut mode = mode();
        let before: Vec<_> = mode.engine.segments().to_vec();

        mode.update_game();

        assert_eq!(mode.engine.segments(), before.as_slice());
        assert_eq!(mode.metrics.moves, 0);
    }

    #[test]
    fn test_blocked_direction_request_is_dropped() {
        let mut mode = mode();

        // establish a rightward heading, then ask for the reversal
        mode.pending_direction = Some(Direction::Right);
        mode.update_game();
        mode.pending_direction = Some(Direction::Left);
        mode.update_game();

        assert_eq!(mode.engine.heading(), Some(Direction::Right));
    }

    #[test]
    fn test_game_reset() {
        let mut mode = mode();
        mode.pending_direction = Some(Direction::Up);
        mode.update_game();
        let moved: Vec<_> = mode.engine.segments().to_vec();

        mode.reset_game();

        assert_ne!(mode.engine.segments(), moved.as_slice());
        assert_eq!(mode.engine.heading(), None);
        assert_eq!(mode.metrics.moves, 0);
        assert_eq!(mode.metrics.restarts, 1);
        assert_eq!(mode.pending_direction, None);
    }
}
