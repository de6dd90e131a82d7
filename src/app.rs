use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{trace, warn};

use crate::config::Config;
use crate::event::Event;
use crate::figure::FigureView;

// ── Application State ─────────────────────────────────────────────────

pub struct App {
    pub config: Config,
    pub figure: FigureView,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, event_tx: mpsc::UnboundedSender<Event>) -> Self {
        let figure = FigureView::new(&config, event_tx);
        Self {
            config,
            figure,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tap { column, row } => {
                trace!("Tap at {},{}", column, row);
                if let Err(e) = self.figure.tap() {
                    warn!("Could not start animation: {}", e);
                }
            }
            Event::Frame(generation) => {
                self.figure.advance(generation);
            }
            Event::Resize(_w, _h) => {
                // Terminal resized; the next draw picks up the new size
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}
