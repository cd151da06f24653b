//! This module implements the A* search algorithm with unit step costs.

use crate::search::{
    search_engines::{SearchEngine, SearchEngineName, SearchOutcome, SearchResult},
    Domain, Path, PriorityFrontier, SearchNodeStatus, SearchSpace, SearchStatistics,
    ZERO_HEURISTIC,
};
use tracing::{debug, trace};

/// A* search ordered by `f = g + h`, ties going to the entry queued first.
///
/// A node is relaxed only when a strictly cheaper path to it turns up. If the
/// node had already been expanded it is reopened, which can only happen when
/// the heuristic is inconsistent. The search stops when the goal node is
/// popped, which gives an optimal path as long as the heuristic is
/// admissible.
///
/// [`Domain::heuristic`] estimates the distance to the domain's own goal, so
/// it is only used when `goal` satisfies [`Domain::is_goal`]. Any other goal
/// is searched with a zero heuristic, i.e. uniform cost search.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search<D: Domain>(&self, domain: &D, start: &D::State, goal: &D::State) -> SearchOutcome<D> {
        let mut statistics = SearchStatistics::new(SearchEngineName::Astar.as_str());
        if start == goal {
            return (
                SearchResult::Success(Path::trivial(start.clone())),
                statistics.finalise_search(),
            );
        }

        let informed = domain.is_goal(goal);
        if !informed {
            debug!(?goal, "goal is not a domain goal, ignoring heuristic");
        }
        let heuristic = |state: &D::State| {
            if informed {
                domain.heuristic(state)
            } else {
                ZERO_HEURISTIC
            }
        };

        let mut open_list = PriorityFrontier::new();
        let mut search_space = SearchSpace::new(start.clone());
        let root_node = search_space.get_root_node_mut();
        root_node.open(ZERO_HEURISTIC, heuristic(start));
        open_list.push(root_node.get_node_id(), root_node.get_f());

        while let Some((node_id, _)) = open_list.pop() {
            let node = search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_visited_nodes();

            let state = search_space.get_state(node_id);
            if state == goal {
                debug!(?state, g = g_value.into_inner(), "goal popped");
                return (
                    SearchResult::Success(search_space.extract_path(node_id)),
                    statistics.finalise_search(),
                );
            }
            trace!(?state, g = g_value.into_inner(), "expanding");

            let transitions = domain.successors(state);
            statistics.increment_generated_nodes(transitions.len());
            let tentative_g = g_value + 1.;
            for transition in transitions {
                let child_id = search_space
                    .insert_or_get_node(transition.state, transition.action.clone(), node_id)
                    .get_node_id();

                if search_space.get_node(child_id).get_status() == SearchNodeStatus::New {
                    let h_value = heuristic(search_space.get_state(child_id));
                    debug_assert!(h_value >= ZERO_HEURISTIC, "Heuristic must be non-negative");
                    let child_node = search_space.get_node_mut(child_id);
                    child_node.open(tentative_g, h_value);
                    open_list.push(child_id, child_node.get_f());
                    continue;
                }

                let child_node = search_space.get_node_mut(child_id);
                if tentative_g < child_node.get_g() {
                    if child_node.get_status() == SearchNodeStatus::Closed {
                        statistics.increment_reopened_nodes();
                    }
                    child_node.set_parent(node_id, transition.action);
                    child_node.open(tentative_g, child_node.get_h());
                    open_list.push(child_id, child_node.get_f());
                }
            }
        }

        (SearchResult::ProvablyUnsolvable, statistics.finalise_search())
    }
}
