use crate::search::{Domain, HeuristicValue, Transition, ZERO_HEURISTIC};
use ordered_float::OrderedFloat;
use std::{collections::HashMap, fmt};

pub type Vertex = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// A directed graph given edge by edge, with a single goal vertex and
/// optional heuristic tables. Vertices missing from a table get zero.
///
/// Successors and predecessors come out in the order the edges were added,
/// which makes tie-breaking in the search engines easy to steer.
#[derive(Debug, Clone)]
pub struct ExplicitGraph {
    goal: Vertex,
    outgoing: HashMap<Vertex, Vec<Edge>>,
    incoming: HashMap<Vertex, Vec<Edge>>,
    heuristic: HashMap<Vertex, HeuristicValue>,
    backward_heuristic: HashMap<Vertex, HeuristicValue>,
}

impl ExplicitGraph {
    pub fn new(goal: Vertex) -> Self {
        Self {
            goal,
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            heuristic: HashMap::new(),
            backward_heuristic: HashMap::new(),
        }
    }

    pub fn with_edge(mut self, from: Vertex, to: Vertex) -> Self {
        let edge = Edge { from, to };
        self.outgoing.entry(from).or_default().push(edge);
        self.incoming.entry(to).or_default().push(edge);
        self
    }

    /// Estimate from `vertex` to the goal.
    pub fn with_heuristic(mut self, vertex: Vertex, value: f64) -> Self {
        self.heuristic.insert(vertex, OrderedFloat(value));
        self
    }

    /// Estimate from the start of the search to `vertex`.
    pub fn with_backward_heuristic(mut self, vertex: Vertex, value: f64) -> Self {
        self.backward_heuristic.insert(vertex, OrderedFloat(value));
        self
    }

    pub fn goal(&self) -> Vertex {
        self.goal
    }
}

impl Domain for ExplicitGraph {
    type State = Vertex;
    type Action = Edge;

    fn successors(&self, state: &Vertex) -> Vec<Transition<Vertex, Edge>> {
        self.outgoing
            .get(state)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&edge| Transition::new(edge.to, edge))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn predecessors(&self, state: &Vertex) -> Vec<Transition<Vertex, Edge>> {
        self.incoming
            .get(state)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&edge| Transition::new(edge.from, edge))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_goal(&self, state: &Vertex) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &Vertex) -> HeuristicValue {
        self.heuristic.get(state).copied().unwrap_or(ZERO_HEURISTIC)
    }

    /// The table is fixed, so it is only meaningful for the one start
    /// vertex it was written for.
    fn backward_heuristic(&self, state: &Vertex, _start: &Vertex) -> HeuristicValue {
        self.backward_heuristic
            .get(state)
            .copied()
            .unwrap_or(ZERO_HEURISTIC)
    }
}
