pub mod chain;
pub mod controller;
pub mod geometry;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::animation::Animator;
use crate::config::Config;
use crate::error::FigureResult;
use crate::event::Event;

use self::chain::NodeChain;
use self::controller::FigureController;
use self::geometry::{FigureGeometry, Square};

/// The figure as the UI sees it: node chain, controller and frame timer.
///
/// A tap starts one leg on the current node; frames advance it until it
/// comes to rest, at which point the timer stops and the figure waits for
/// the next tap.
pub struct FigureView {
    controller: FigureController,
    animator: Animator,
    legs: u64,
}

impl FigureView {
    pub fn new(config: &Config, event_tx: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            controller: FigureController::new(NodeChain::new(config.nodes), config.motion),
            animator: Animator::new(config.frame_delay, event_tx),
            legs: 0,
        }
    }

    pub fn controller(&self) -> &FigureController {
        &self.controller
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Number of legs completed so far.
    pub fn legs(&self) -> u64 {
        self.legs
    }

    /// Handle a tap. Returns `true` if a new leg started.
    pub fn tap(&mut self) -> FigureResult<bool> {
        if !self.controller.is_idle() {
            debug!("Tap ignored, node {} is mid-leg", self.controller.current());
            return Ok(false);
        }

        let mut started = false;
        self.controller.start_updating(|| started = true);
        if !started {
            return Ok(false);
        }

        self.animator.start()?;
        info!("Node {} starting a leg", self.controller.current());
        Ok(true)
    }

    /// Handle one frame from the timer of the given generation.
    ///
    /// Returns the index and resting scale of a node that just finished.
    pub fn advance(&mut self, generation: u64) -> Option<(usize, f32)> {
        let controller = &mut self.controller;
        let finished = self
            .animator
            .tick(generation, || {
                let mut finished = None;
                controller.update(|index, scale| finished = Some((index, scale)));
                finished
            })
            .flatten();

        if let Some((index, scale)) = finished {
            self.animator.stop();
            self.legs += 1;
            info!(
                "Node {} came to rest at {}; node {} is next",
                index,
                scale,
                self.controller.current()
            );
        }
        finished
    }

    /// Every square of every node, in node order.
    pub fn squares(&self, geometry: &FigureGeometry) -> Vec<Square> {
        let mut squares = Vec::new();
        self.controller
            .chain()
            .draw(|node| squares.extend(geometry.node_squares(node.index, node.state.scale)));
        squares
    }
}
