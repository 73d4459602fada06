use crate::app::{mode::AppMode, App};
use crate::ui::render::render_app;
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(tick_rate_ms: u64) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            tick_rate: Duration::from_millis(tick_rate_ms),
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                debug!("Leaving event loop");
                return Ok(());
            }

            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => app.handle_key(key, Instant::now()),
                    Event::Paste(text) => app.handle_paste(&text),
                    _ => {}
                }
            }

            // Expire toasts whether or not a key arrived
            app.tick(Instant::now());
            self.render_frame(app)?;
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        self.terminal.draw(|frame| render_app(frame, &render_state))?;
        Ok(())
    }
}
