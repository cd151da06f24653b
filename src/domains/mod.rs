//! Concrete domains the search engines can be run on.

mod graph;
mod grid;
mod river;

pub use graph::{Edge, ExplicitGraph, Vertex};
pub use grid::{Direction, FetchAction, FetchState, GridConfig, GridDomain};
pub use river::{Bank, Cargo, Crossing, RiverCrossing, RiverState};
