//! The four search strategies. Each is available as a [`SearchEngine`]
//! implementor and as a plain function taking a domain, a start state and a
//! goal state.

mod astar;
mod backward_greedy;
mod bfs;
mod bidirectional_bfs;
mod search_engine;

pub use astar::AStar;
pub use backward_greedy::BackwardGreedy;
pub use bfs::Bfs;
pub use bidirectional_bfs::BidirectionalBfs;
pub use search_engine::{SearchEngine, SearchEngineName, SearchOutcome, SearchResult};

use crate::search::Domain;

pub fn bfs<D: Domain>(domain: &D, start: &D::State, goal: &D::State) -> SearchOutcome<D> {
    Bfs::new().search(domain, start, goal)
}

pub fn astar<D: Domain>(domain: &D, start: &D::State, goal: &D::State) -> SearchOutcome<D> {
    AStar::new().search(domain, start, goal)
}

pub fn backward_greedy<D: Domain>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
) -> SearchOutcome<D> {
    BackwardGreedy::new().search(domain, start, goal)
}

pub fn bidirectional_bfs<D: Domain>(
    domain: &D,
    start: &D::State,
    goal: &D::State,
) -> SearchOutcome<D> {
    BidirectionalBfs::new().search(domain, start, goal)
}
