use tracing::{debug, trace};

use super::chain::{Node, NodeChain, Traversal};
use crate::animation::Motion;

/// Owns the node chain and walks it one leg at a time.
#[derive(Debug, Clone)]
pub struct FigureController {
    chain: NodeChain,
    current: usize,
    traversal: Traversal,
    motion: Motion,
}

impl FigureController {
    pub fn new(chain: NodeChain, motion: Motion) -> Self {
        Self {
            chain,
            current: 0,
            traversal: Traversal::Forward,
            motion,
        }
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn current_node(&self) -> Option<&Node> {
        self.chain.node(self.current)
    }

    pub fn is_idle(&self) -> bool {
        self.current_node().map_or(true, |node| node.state.is_idle())
    }

    /// Advance the current node by one tick.
    ///
    /// When its leg finishes the controller moves on to the neighbouring
    /// node (turning around at either end) and `on_tick` receives the
    /// finished node's index and resting scale.
    pub fn update(&mut self, on_tick: impl FnOnce(usize, f32)) {
        let Self {
            chain,
            current,
            traversal,
            motion,
        } = self;

        let mut finished = None;
        if let Some(node) = chain.node_mut(*current) {
            node.update(motion, |index, scale| finished = Some((index, scale)));
        }

        if let Some((index, scale)) = finished {
            *current = chain.get_next(*current, *traversal, || {
                traversal.flip();
                debug!("Reached end of chain at node {}, turning around", index);
            });
            trace!("Node {} came to rest at {}, next is {}", index, scale, current);
            on_tick(index, scale);
        }
    }

    /// Start a leg on the current node unless one is already running.
    pub fn start_updating(&mut self, on_start: impl FnOnce()) {
        if let Some(node) = self.chain.node_mut(self.current) {
            node.state.start_updating(on_start);
        }
    }
}

impl Default for FigureController {
    fn default() -> Self {
        Self::new(NodeChain::default(), Motion::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run one full leg on the current node; returns what `on_tick` saw.
    fn run_leg(controller: &mut FigureController) -> (usize, f32) {
        controller.start_updating(|| {});
        let mut finished = None;
        for _ in 0..1000 {
            controller.update(|index, scale| finished = Some((index, scale)));
            if finished.is_some() {
                break;
            }
        }
        finished.expect("leg never completed")
    }

    #[test]
    fn starts_idle_at_head() {
        let controller = FigureController::default();
        assert_eq!(controller.current(), 0);
        assert_eq!(controller.traversal(), Traversal::Forward);
        assert!(controller.is_idle());
    }

    #[test]
    fn one_leg_moves_to_next_node() {
        let mut controller = FigureController::default();
        assert_eq!(run_leg(&mut controller), (0, 1.0));
        assert_eq!(controller.current(), 1);
        assert_eq!(controller.chain().node(0).unwrap().state.scale, 1.0);
        assert!(controller.is_idle());
    }

    #[test]
    fn legs_ping_pong_and_reverse_scales() {
        let mut controller = FigureController::default();

        let finished: Vec<(usize, f32)> = (0..10).map(|_| run_leg(&mut controller)).collect();

        let order: Vec<usize> = finished.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0]);

        // Node 4 rises to 1 then falls back to 0 on the way back.
        assert_eq!(finished[4], (4, 1.0));
        assert_eq!(finished[5], (4, 0.0));
        assert!(controller.chain().iter().all(|n| n.state.scale == 0.0));

        assert_eq!(controller.current(), 0);
        assert_eq!(controller.traversal(), Traversal::Forward);
    }

    #[test]
    fn start_updating_is_ignored_mid_leg() {
        let mut controller = FigureController::default();
        let mut starts = 0;
        controller.start_updating(|| starts += 1);
        controller.update(|_, _| {});
        controller.start_updating(|| starts += 1);

        assert_eq!(starts, 1);
        assert!(!controller.is_idle());
    }

    #[test]
    fn update_while_idle_changes_nothing() {
        let mut controller = FigureController::default();
        let mut ticked = false;
        controller.update(|_, _| ticked = true);
        assert!(!ticked);
        assert_eq!(controller.current(), 0);
    }
}
