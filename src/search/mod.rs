mod domain;
mod frontier;
mod heuristic;
mod path;
mod report;
mod search_node;
mod search_space;
mod search_statistics;
mod transition;
mod verbosity;

pub mod search_engines;

pub use domain::Domain;
pub use frontier::{FifoFrontier, PriorityFrontier};
pub use heuristic::{manhattan_distance, HeuristicValue, ZERO_HEURISTIC};
pub use path::Path;
pub use report::{Report, StrategyReport};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::{NodeId, SearchSpace, NO_NODE};
pub use search_statistics::{SearchStatistics, SearchStats};
pub use transition::Transition;
pub use verbosity::Verbosity;
