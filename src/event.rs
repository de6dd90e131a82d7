use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{trace, warn};

/// Application-level events
#[derive(Debug, Clone)]
pub enum Event {
    /// User key press
    Key(KeyEvent),
    /// Pointer pressed somewhere on the surface
    Tap { column: u16, row: u16 },
    /// Animation frame requested by the frame timer of the given generation
    Frame(u64),
    /// Terminal resize
    Resize(u16, u16),
}

/// Translate a raw terminal event into an application event, if it is one
/// the figure cares about.
pub fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(_),
            column,
            row,
            ..
        }) => Some(Event::Tap { column, row }),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}

/// Collects terminal input onto a single queue that the frame timer also
/// posts to.
///
/// Uses crossterm's async `EventStream` (via `futures::StreamExt`) instead of
/// blocking `event::poll()` / `event::read()`, so no tokio worker thread is
/// ever blocked.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tx: mpsc::UnboundedSender<Event>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Create a new event handler and spawn the input task.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));

        let input_tx = tx.clone();
        let input_stop = stop.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                let maybe_event = reader.next().await;
                if input_stop.load(Ordering::Relaxed) {
                    return;
                }
                match maybe_event {
                    Some(Ok(raw)) => {
                        let Some(event) = translate(raw) else {
                            continue;
                        };
                        trace!("Input event: {:?}", event);
                        if input_tx.send(event).is_err() {
                            return;
                        }
                    }
                    Some(Err(e)) => {
                        warn!("Terminal input stream failed: {}", e);
                        return;
                    }
                    None => return,
                }
            }
        });

        Self { rx, tx, stop }
    }

    /// Get a clone of the sender for the frame timer
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Signal the input task to stop
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
