use crate::animation::{Motion, ScaleState};

/// Number of nodes stacked in the figure.
pub const NODES: usize = 5;

/// Which way the controller walks along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Backward,
}

impl Traversal {
    pub fn flip(&mut self) {
        *self = match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        };
    }
}

/// One square-up motif and its animation state.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub index: usize,
    pub state: ScaleState,
}

impl Node {
    pub fn update(&mut self, motion: &Motion, on_complete: impl FnOnce(usize, f32)) {
        let index = self.index;
        self.state.update(motion, |scale| on_complete(index, scale));
    }
}

/// Fixed-length run of nodes; neighbours are found by index.
#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    pub fn new(len: usize) -> Self {
        let nodes = (0..len)
            .map(|index| Node {
                index,
                state: ScaleState::default(),
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Visit every node in index order.
    pub fn draw(&self, paint: impl FnMut(&Node)) {
        self.iter().for_each(paint);
    }

    fn neighbour(&self, index: usize, traversal: Traversal) -> Option<usize> {
        let next = match traversal {
            Traversal::Forward => index.checked_add(1)?,
            Traversal::Backward => index.checked_sub(1)?,
        };
        (next < self.nodes.len()).then_some(next)
    }

    /// Index of the neighbour in `traversal` direction.
    ///
    /// At either end there is no neighbour: `on_boundary` runs and `index`
    /// comes back unchanged.
    pub fn get_next(&self, index: usize, traversal: Traversal, on_boundary: impl FnOnce()) -> usize {
        match self.neighbour(index, traversal) {
            Some(next) => next,
            None => {
                on_boundary();
                index
            }
        }
    }
}

impl Default for NodeChain {
    fn default() -> Self {
        Self::new(NODES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn chain_is_built_in_index_order() {
        let chain = NodeChain::default();
        assert_eq!(chain.len(), NODES);
        let indices: Vec<usize> = chain.iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert!(chain.iter().all(|n| n.state.is_idle()));
    }

    #[test]
    fn draw_visits_every_node_once() {
        let chain = NodeChain::default();
        let mut seen = Vec::new();
        chain.draw(|node| seen.push(node.index));
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn get_next_moves_to_neighbours() {
        let chain = NodeChain::default();
        let mut flipped = false;
        assert_eq!(chain.get_next(2, Traversal::Forward, || flipped = true), 3);
        assert_eq!(chain.get_next(2, Traversal::Backward, || flipped = true), 1);
        assert!(!flipped);
    }

    #[test]
    fn get_next_stays_put_at_boundaries() {
        let chain = NodeChain::default();

        let mut flipped = false;
        assert_eq!(chain.get_next(4, Traversal::Forward, || flipped = true), 4);
        assert!(flipped);

        let mut flipped = false;
        assert_eq!(chain.get_next(0, Traversal::Backward, || flipped = true), 0);
        assert!(flipped);
    }

    #[test]
    fn traversal_ping_pongs_across_the_chain() {
        let chain = NodeChain::default();
        let traversal = Cell::new(Traversal::Forward);
        let mut index = 0;
        let mut visits = Vec::new();
        let mut flips = Vec::new();

        for step in 0..12 {
            index = chain.get_next(index, traversal.get(), || {
                let mut turned = traversal.get();
                turned.flip();
                traversal.set(turned);
                flips.push(step);
            });
            visits.push(index);
        }

        assert_eq!(visits, vec![1, 2, 3, 4, 4, 3, 2, 1, 0, 0, 1, 2]);
        assert_eq!(flips, vec![4, 9]);
        assert_eq!(traversal.get(), Traversal::Forward);
    }

    #[test]
    fn node_update_reports_its_index() {
        let motion = Motion::default();
        let mut chain = NodeChain::default();
        let node = chain.node_mut(3).unwrap();
        node.state.start_updating(|| {});

        let mut finished = None;
        while finished.is_none() {
            node.update(&motion, |index, scale| finished = Some((index, scale)));
        }
        assert_eq!(finished, Some((3, 1.0)));
    }
}
