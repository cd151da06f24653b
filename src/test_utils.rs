use crate::{
    domains::FetchState,
    search::{search_engines::SearchResult, Domain, Path, SearchStats},
};
use std::collections::{HashSet, VecDeque};

/// Shortest path on the default 2x2 fetch grid, as found by the forward
/// engines.
pub fn default_fetch_bfs_path() -> Vec<FetchState> {
    vec![
        FetchState::new(0, 0, false),
        FetchState::new(0, 1, false),
        FetchState::new(1, 1, false),
        FetchState::new(1, 1, true),
        FetchState::new(1, 0, true),
        FetchState::new(0, 0, true),
    ]
}

pub fn default_fetch_greedy_path() -> Vec<FetchState> {
    vec![
        FetchState::new(0, 0, false),
        FetchState::new(1, 0, false),
        FetchState::new(1, 1, false),
        FetchState::new(1, 1, true),
        FetchState::new(0, 1, true),
        FetchState::new(0, 0, true),
    ]
}

pub fn default_fetch_bidirectional_path() -> Vec<FetchState> {
    vec![
        FetchState::new(0, 0, false),
        FetchState::new(0, 1, false),
        FetchState::new(1, 1, false),
        FetchState::new(1, 1, true),
        FetchState::new(0, 1, true),
        FetchState::new(0, 0, true),
    ]
}

/// Every step of `path` must be one of the successors of the state before
/// it, with the recorded action.
pub fn assert_path_follows_successors<D>(domain: &D, path: &Path<D::State, D::Action>)
where
    D: Domain,
    D::Action: PartialEq,
{
    let states = path.states();
    for (i, action) in path.actions().iter().enumerate() {
        let successors = domain.successors(&states[i]);
        assert!(
            successors
                .iter()
                .any(|t| t.state == states[i + 1] && &t.action == action),
            "Step {} from {:?} to {:?} via {:?} is not a successor",
            i,
            states[i],
            states[i + 1],
            action
        );
    }
}

pub fn assert_trivial<S, A>(result: &SearchResult<S, A>, stats: &SearchStats, state: &S)
where
    S: PartialEq + std::fmt::Debug,
{
    let path = result.path().expect("Trivial search must succeed");
    assert_eq!(path.states(), std::slice::from_ref(state));
    assert_eq!(stats.visited_nodes, 0);
    assert_eq!(stats.generated_nodes, 0);
    assert_eq!(stats.reopened_nodes, 0);
    assert_eq!(stats.branching_factor(), 0.);
}

/// All states reachable from `start` through successors, in BFS order.
pub fn reachable_states<D: Domain>(domain: &D, start: &D::State) -> Vec<D::State> {
    let mut seen = HashSet::from([start.clone()]);
    let mut order = vec![start.clone()];
    let mut queue = VecDeque::from([start.clone()]);
    while let Some(state) = queue.pop_front() {
        for transition in domain.successors(&state) {
            if seen.insert(transition.state.clone()) {
                order.push(transition.state.clone());
                queue.push_back(transition.state);
            }
        }
    }
    order
}

/// Check, over every state reachable from `start`, that each successor
/// lists the state among its predecessors with the same action, and each
/// predecessor lists it among its successors.
pub fn assert_inverse_consistent<D>(domain: &D, start: &D::State)
where
    D: Domain,
    D::Action: PartialEq,
{
    for state in reachable_states(domain, start) {
        for forward in domain.successors(&state) {
            assert!(
                domain
                    .predecessors(&forward.state)
                    .iter()
                    .any(|t| t.state == state && t.action == forward.action),
                "{:?} is a successor of {:?} but not the other way round",
                forward.state,
                state
            );
        }
        for backward in domain.predecessors(&state) {
            assert!(
                domain
                    .successors(&backward.state)
                    .iter()
                    .any(|t| t.state == state && t.action == backward.action),
                "{:?} is a predecessor of {:?} but not the other way round",
                backward.state,
                state
            );
        }
    }
}
