//! Main TUI application

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::home::HomeView;
use super::styles::{Theme, ThemeMode};
use crate::config::Config;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub struct App {
    home: HomeView,
    should_quit: bool,
    mode: ThemeMode,
    theme: Theme,
}

impl App {
    pub fn new(file_path: PathBuf, config: &Config) -> Self {
        let mode = ThemeMode::from_name(&config.theme.name);
        Self {
            home: HomeView::new(file_path),
            should_quit: false,
            mode,
            theme: mode.theme(),
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        // Initial render
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                            terminal.draw(|f| self.render(f))?;
                        }
                        Some(Ok(Event::Resize(_, _))) => {
                            terminal.draw(|f| self.render(f))?;
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }
                _ = tick.tick() => {
                    if self.home.expire_status(Instant::now()) {
                        terminal.draw(|f| self.render(f))?;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        self.home.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global keybindings
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        // Delegate to home view
        if let Some(action) = self.home.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ToggleTheme => self.toggle_theme(),
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.mode = self.mode.toggled();
        self.theme = self.mode.theme();
        self.home.flash(format!("Switched to {} theme", self.mode.name()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
}
