use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::error::{FigureError, FigureResult};
use crate::event::Event;

/// Paces the figure by posting `Event::Frame` on a fixed interval.
///
/// The spawned timer task doubles as the cancel handle: the animator is
/// active exactly while it holds one. Frames are only requests; the state
/// itself advances when the main loop calls [`Animator::tick`].
///
/// Every start bumps the generation stamped on the frames, so frames left
/// in the queue by an earlier timer never drive a later one.
pub struct Animator {
    frame_delay: Duration,
    tx: mpsc::UnboundedSender<Event>,
    timer: Option<JoinHandle<()>>,
    generation: u64,
}

impl Animator {
    pub fn new(frame_delay: Duration, tx: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            frame_delay,
            tx,
            timer: None,
            generation: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Generation of the current (or most recent) timer.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start the frame timer. The first frame is posted immediately.
    ///
    /// Returns `Ok(false)` if the timer was already running.
    pub fn start(&mut self) -> FigureResult<bool> {
        if self.timer.is_some() {
            return Ok(false);
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| FigureError::Runtime(format!("Cannot start frame timer: {}", e)))?;
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let tx = self.tx.clone();
        let delay = self.frame_delay;

        self.timer = Some(runtime.spawn(async move {
            let mut interval = tokio::time::interval(delay);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Event::Frame(generation)).is_err() {
                    // Nobody left to redraw; the animation stalls until restarted.
                    debug!("Frame queue closed, frame timer exiting");
                    return;
                }
            }
        }));

        debug!("Frame timer {} started ({:?} per frame)", generation, delay);
        Ok(true)
    }

    /// Cancel the frame timer. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                timer.abort();
                debug!("Frame timer stopped");
                true
            }
            None => false,
        }
    }

    /// Run `on_frame` for a frame of the running timer.
    ///
    /// Frames from a stopped timer are still in the queue after it stops;
    /// they arrive with an older generation and are dropped.
    pub fn tick<T>(&self, generation: u64, on_frame: impl FnOnce() -> T) -> Option<T> {
        if !self.is_running() || generation != self.generation {
            trace!("Dropping frame of timer {}", generation);
            return None;
        }
        Some(on_frame())
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}
