//! Breadth first search

use crate::search::{
    search_engines::{SearchEngine, SearchEngineName, SearchOutcome, SearchResult},
    Domain, FifoFrontier, Path, SearchNodeStatus, SearchSpace, SearchStatistics, ZERO_HEURISTIC,
};
use tracing::{debug, trace};

/// Breadth-first search from the start state until the goal state is popped.
/// Every state is queued at most once, the first time it is discovered, so
/// the path found has the fewest steps.
#[derive(Debug, Default)]
pub struct Bfs {}

impl Bfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Bfs {
    fn search<D: Domain>(&self, domain: &D, start: &D::State, goal: &D::State) -> SearchOutcome<D> {
        let mut statistics = SearchStatistics::new(SearchEngineName::Bfs.as_str());
        if start == goal {
            return (
                SearchResult::Success(Path::trivial(start.clone())),
                statistics.finalise_search(),
            );
        }

        let mut queue = FifoFrontier::new();
        let mut search_space = SearchSpace::new(start.clone());
        let root_node = search_space.get_root_node_mut();
        root_node.open(ZERO_HEURISTIC, ZERO_HEURISTIC);
        queue.push(root_node.get_node_id());

        while let Some(node_id) = queue.pop() {
            let node = search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_visited_nodes();

            let state = search_space.get_state(node_id);
            if state == goal {
                debug!(?state, "goal popped");
                return (
                    SearchResult::Success(search_space.extract_path(node_id)),
                    statistics.finalise_search(),
                );
            }
            trace!(?state, "expanding");

            let transitions = domain.successors(state);
            statistics.increment_generated_nodes(transitions.len());
            for transition in transitions {
                let child_node =
                    search_space.insert_or_get_node(transition.state, transition.action, node_id);
                if child_node.get_status() == SearchNodeStatus::New {
                    child_node.open(g_value + 1., ZERO_HEURISTIC);
                    queue.push(child_node.get_node_id());
                }
            }
        }

        (SearchResult::ProvablyUnsolvable, statistics.finalise_search())
    }
}
