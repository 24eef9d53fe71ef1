//! Per-step notifications for visualizers.
//!
//! Every neighbour evaluated during a step and the node moved to the closed
//! set are reported individually, in the order they happen.

use crate::node::SearchNode;

/// What happened to a neighbour when it was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discovery {
    /// Newly inserted into the open set.
    New,
    /// Already open; its costs and parent were replaced.
    Overwritten,
    /// Already open with a cost at least as good; left unchanged.
    Kept,
}

/// A neighbour evaluated during a step, with the costs computed for it.
///
/// `node` carries the freshly computed `g`/`h` even when the open set kept
/// its previous values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub node: SearchNode,
    pub discovery: Discovery,
}

/// Receives step notifications. Both methods default to doing nothing.
pub trait StepObserver {
    fn evaluated(&mut self, _eval: &Evaluation) {}
    fn closed(&mut self, _node: &SearchNode) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {}

/// A single recorded notification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepEvent {
    Evaluated(Evaluation),
    Closed(SearchNode),
}

/// Observer that records every notification in emission order.
#[derive(Debug, Default, Clone)]
pub struct StepLog {
    pub events: Vec<StepEvent>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluations recorded so far.
    pub fn evaluations(&self) -> impl Iterator<Item = &Evaluation> {
        self.events.iter().filter_map(|e| match e {
            StepEvent::Evaluated(ev) => Some(ev),
            StepEvent::Closed(_) => None,
        })
    }

    /// Nodes closed so far, in order.
    pub fn closed_nodes(&self) -> impl Iterator<Item = &SearchNode> {
        self.events.iter().filter_map(|e| match e {
            StepEvent::Closed(n) => Some(n),
            StepEvent::Evaluated(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl StepObserver for StepLog {
    fn evaluated(&mut self, eval: &Evaluation) {
        self.events.push(StepEvent::Evaluated(*eval));
    }

    fn closed(&mut self, node: &SearchNode) {
        self.events.push(StepEvent::Closed(*node));
    }
}

impl<O: StepObserver + ?Sized> StepObserver for &mut O {
    fn evaluated(&mut self, eval: &Evaluation) {
        (**self).evaluated(eval);
    }

    fn closed(&mut self, node: &SearchNode) {
        (**self).closed(node);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use stepstar_core::Location;

    #[test]
    fn step_event_round_trip() {
        let ev = StepEvent::Evaluated(Evaluation {
            node: SearchNode::reached(Location::new(4, 2), 2.0, 1.5, Location::new(3, 2)),
            discovery: Discovery::Overwritten,
        });
        let json = serde_json::to_string(&ev).unwrap();
        let back: StepEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}
