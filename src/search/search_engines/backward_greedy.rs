//! This module implements greedy best-first search run backwards, from the
//! goal to the start.

use crate::search::{
    search_engines::{SearchEngine, SearchEngineName, SearchOutcome, SearchResult},
    Domain, Path, PriorityFrontier, SearchNodeStatus, SearchSpace, SearchStatistics,
    ZERO_HEURISTIC,
};
use tracing::{debug, trace};

/// Greedy best-first search from the goal through
/// [`Domain::predecessors`], ordered only by
/// [`Domain::backward_heuristic`] towards the start state. Ties go to the
/// state queued first, and every state is queued at most once.
///
/// This is not an optimal search. Ignoring the cost so far means it can, and
/// does, return paths longer than those of [`crate::search::search_engines::AStar`]
/// or [`crate::search::search_engines::Bfs`].
///
/// The search space is rooted at the goal, so following parent links from
/// the start leads to the goal. The returned path is therefore already in
/// forward order, start first.
#[derive(Debug, Default)]
pub struct BackwardGreedy {}

impl BackwardGreedy {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BackwardGreedy {
    fn search<D: Domain>(&self, domain: &D, start: &D::State, goal: &D::State) -> SearchOutcome<D> {
        let mut statistics = SearchStatistics::new(SearchEngineName::BackwardGreedy.as_str());
        if start == goal {
            return (
                SearchResult::Success(Path::trivial(start.clone())),
                statistics.finalise_search(),
            );
        }

        let mut open_list = PriorityFrontier::new();
        let mut search_space = SearchSpace::new(goal.clone());
        let root_node = search_space.get_root_node_mut();
        root_node.open(ZERO_HEURISTIC, domain.backward_heuristic(goal, start));
        open_list.push(root_node.get_node_id(), root_node.get_h());

        while let Some((node_id, h_value)) = open_list.pop() {
            let node = search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_visited_nodes();

            let state = search_space.get_state(node_id);
            if state == start {
                debug!(?state, "start popped");
                return (
                    SearchResult::Success(search_space.extract_path_to_root(node_id)),
                    statistics.finalise_search(),
                );
            }
            trace!(?state, h = h_value.into_inner(), "expanding");

            let transitions = domain.predecessors(state);
            statistics.increment_generated_nodes(transitions.len());
            for transition in transitions {
                let parent_node =
                    search_space.insert_or_get_node(transition.state, transition.action, node_id);
                if parent_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                let parent_id = parent_node.get_node_id();
                let h_value = domain.backward_heuristic(search_space.get_state(parent_id), start);
                let parent_node = search_space.get_node_mut(parent_id);
                parent_node.open(g_value + 1., h_value);
                open_list.push(parent_id, h_value);
            }
        }

        (SearchResult::ProvablyUnsolvable, statistics.finalise_search())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domains::{ExplicitGraph, GridConfig, GridDomain, RiverCrossing},
        search::search_engines::{AStar, Bfs},
        test_utils::*,
    };
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn fetch_path_runs_from_start_to_goal() {
        let domain = GridDomain::default();
        let start = domain.start_state();
        let goal = domain.goal_state();
        let (result, stats) = BackwardGreedy::new().search(&domain, &start, &goal);
        let path = result.into_path().unwrap();

        assert_eq!(path.start(), &start);
        assert_eq!(path.end(), &goal);
        assert_path_follows_successors(&domain, &path);

        let (bfs_result, _) = Bfs::new().search(&domain, &start, &goal);
        assert_eq!(path.len(), bfs_result.path().unwrap().len());
        assert_eq!(path.states(), default_fetch_greedy_path().as_slice());

        assert_eq!(stats.visited_nodes, 6);
        assert_eq!(stats.generated_nodes, 11);
        assert_approx_eq!(stats.branching_factor(), 11. / 6.);
    }

    #[test]
    fn larger_grid_path_is_forward() {
        let domain = GridDomain::new(GridConfig::new(5, 4, (0, 3), (4, 0)).unwrap());
        let start = domain.start_state();
        let goal = domain.goal_state();
        let (result, _) = BackwardGreedy::new().search(&domain, &start, &goal);
        let path = result.into_path().unwrap();
        assert_eq!(path.start(), &start);
        assert_eq!(path.end(), &goal);
        assert!(path.len() >= 15);
        assert_path_follows_successors(&domain, &path);
    }

    #[test]
    fn river_crossing_path_is_forward() {
        let domain = RiverCrossing::new();
        let start = domain.start_state();
        let goal = domain.goal_state();
        let (result, _) = BackwardGreedy::new().search(&domain, &start, &goal);
        let path = result.into_path().unwrap();
        assert_eq!(path.start(), &start);
        assert_eq!(path.end(), &goal);
        assert_path_follows_successors(&domain, &path);
    }

    #[test]
    fn greedy_can_be_longer_than_astar() {
        // Both heuristics are admissible. The backward one rates 3 as right
        // next to the start, which pulls the greedy search onto 0-4-3-2.
        let domain = ExplicitGraph::new(2)
            .with_edge(0, 1)
            .with_edge(0, 4)
            .with_edge(1, 2)
            .with_edge(4, 3)
            .with_edge(3, 2)
            .with_backward_heuristic(1, 1.);
        let (greedy_result, greedy_stats) = BackwardGreedy::new().search(&domain, &0, &2);
        let (astar_result, _) = AStar::new().search(&domain, &0, &2);

        let greedy_path = greedy_result.into_path().unwrap();
        let astar_path = astar_result.into_path().unwrap();
        assert_eq!(greedy_path.states(), &[0, 4, 3, 2]);
        assert_eq!(astar_path.states(), &[0, 1, 2]);
        assert!(astar_path.len() <= greedy_path.len());
        assert_eq!(greedy_stats.visited_nodes, 4);
        assert_eq!(greedy_stats.generated_nodes, 4);
    }

    #[test]
    fn start_equal_to_goal_is_trivial() {
        let domain = GridDomain::default();
        let start = domain.start_state();
        let (result, stats) = BackwardGreedy::new().search(&domain, &start, &start);
        assert_trivial(&result, &stats, &start);
    }

    #[test]
    fn unreachable_start_is_unsolvable() {
        // 0 leads to the goal's component only through a missing edge
        let domain = ExplicitGraph::new(2).with_edge(1, 2).with_edge(0, 3);
        let (result, stats) = BackwardGreedy::new().search(&domain, &0, &2);
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(stats.visited_nodes, 2);
        assert_eq!(stats.generated_nodes, 1);
    }

    #[test]
    fn repeated_searches_agree() {
        let domain = GridDomain::new(GridConfig::new(3, 3, (0, 0), (2, 2)).unwrap());
        let start = domain.start_state();
        let goal = domain.goal_state();
        let (first, first_stats) = BackwardGreedy::new().search(&domain, &start, &goal);
        let (second, second_stats) = BackwardGreedy::new().search(&domain, &start, &goal);
        assert_eq!(first, second);
        assert!(first_stats.same_counts(&second_stats));
    }
}
