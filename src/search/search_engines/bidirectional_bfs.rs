//! Bidirectional breadth first search

use crate::search::{
    search_engines::{SearchEngine, SearchEngineName, SearchOutcome, SearchResult},
    Domain, FifoFrontier, NodeId, Path, SearchNodeStatus, SearchSpace, SearchStatistics,
    ZERO_HEURISTIC,
};
use std::{fmt::Debug, hash::Hash};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// One of the two breadth-first waves.
#[derive(Debug)]
struct Wave<S, A> {
    direction: Direction,
    search_space: SearchSpace<S, A>,
    queue: FifoFrontier<NodeId>,
}

impl<S: Clone + Eq + Hash + Debug, A: Clone> Wave<S, A> {
    fn new(direction: Direction, root_state: S) -> Self {
        let mut search_space = SearchSpace::new(root_state);
        let mut queue = FifoFrontier::new();
        let root_node = search_space.get_root_node_mut();
        root_node.open(ZERO_HEURISTIC, ZERO_HEURISTIC);
        queue.push(root_node.get_node_id());
        Self {
            direction,
            search_space,
            queue,
        }
    }

    /// Expand every node currently queued, i.e. one full layer. Stops early
    /// and returns the state as soon as a newly discovered state is already
    /// known to `other`.
    fn expand_layer<D>(
        &mut self,
        domain: &D,
        other: &Wave<S, A>,
        statistics: &mut SearchStatistics,
    ) -> Option<S>
    where
        D: Domain<State = S, Action = A>,
    {
        for _ in 0..self.queue.len() {
            let node_id = self.queue.pop()?;
            let node = self.search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_visited_nodes();

            let state = self.search_space.get_state(node_id);
            trace!(?state, direction = ?self.direction, "expanding");
            let transitions = match self.direction {
                Direction::Forward => domain.successors(state),
                Direction::Backward => domain.predecessors(state),
            };
            statistics.increment_generated_nodes(transitions.len());

            for transition in transitions {
                let child_node = self.search_space.insert_or_get_node(
                    transition.state,
                    transition.action,
                    node_id,
                );
                if child_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                child_node.open(g_value + 1., ZERO_HEURISTIC);
                let child_id = child_node.get_node_id();
                self.queue.push(child_id);

                let child_state = self.search_space.get_state(child_id);
                if other.search_space.contains(child_state) {
                    return Some(child_state.clone());
                }
            }
        }
        None
    }
}

/// Breadth-first search from both ends at once. Each round expands one full
/// layer forward from the start, then one full layer backward from the goal.
/// The search stops at the first state discovered by one wave that the other
/// wave already knows, and joins the two halves of the path there.
///
/// The first meeting state found is used even when a different meeting state
/// of the same round would give a shorter joined path.
#[derive(Debug, Default)]
pub struct BidirectionalBfs {}

impl BidirectionalBfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BidirectionalBfs {
    fn search<D: Domain>(&self, domain: &D, start: &D::State, goal: &D::State) -> SearchOutcome<D> {
        let mut statistics = SearchStatistics::new(SearchEngineName::Bidirectional.as_str());
        if start == goal {
            return (
                SearchResult::Success(Path::trivial(start.clone())),
                statistics.finalise_search(),
            );
        }

        let mut forward = Wave::new(Direction::Forward, start.clone());
        let mut backward = Wave::new(Direction::Backward, goal.clone());

        let mut meeting_state = None;
        while meeting_state.is_none() && !forward.queue.is_empty() && !backward.queue.is_empty() {
            meeting_state = forward.expand_layer(domain, &backward, &mut statistics);
            if meeting_state.is_none() {
                meeting_state = backward.expand_layer(domain, &forward, &mut statistics);
            }
        }

        let Some(meeting_state) = meeting_state else {
            return (SearchResult::ProvablyUnsolvable, statistics.finalise_search());
        };
        debug!(?meeting_state, "waves met");

        let (Some(forward_id), Some(backward_id)) = (
            forward.search_space.get_node_id(&meeting_state),
            backward.search_space.get_node_id(&meeting_state),
        ) else {
            unreachable!("Meeting state is known to both waves");
        };
        let path = forward
            .search_space
            .extract_path(forward_id)
            .join(backward.search_space.extract_path_to_root(backward_id));

        (SearchResult::Success(path), statistics.finalise_search())
    }
}
