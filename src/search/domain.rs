use crate::search::{HeuristicValue, Transition, ZERO_HEURISTIC};
use std::fmt::Debug;
use std::hash::Hash;

/// A [`Domain`] describes an implicit state graph with unit step costs. The
/// search engines only ever see a domain through this trait, and a domain
/// never keeps any state of its own between calls.
///
/// Implementations must keep [`Domain::successors`] and
/// [`Domain::predecessors`] exact inverses of each other: `t` is among the
/// successors of `s` if and only if `s` is among the predecessors of `t`.
/// Nothing checks this at search time. A domain that breaks it makes the
/// backward and bidirectional searches return wrong answers.
pub trait Domain {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// All transitions leaving `state`, in the order the engines should
    /// consider them.
    fn successors(&self, state: &Self::State) -> Vec<Transition<Self::State, Self::Action>>;

    /// All transitions entering `state`. The state of each returned
    /// transition is the preceding state, and its action is the forward
    /// action taking that state to `state`.
    fn predecessors(&self, state: &Self::State) -> Vec<Transition<Self::State, Self::Action>>;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimate of the number of steps from `state` to a goal. Must be
    /// non-negative, and never overestimate for A* to return optimal paths.
    fn heuristic(&self, state: &Self::State) -> HeuristicValue;

    /// Estimate of the number of steps from `start` to `state`, used to guide
    /// searches that run from the goal back to the start. Uninformed unless
    /// the domain overrides it.
    fn backward_heuristic(&self, _state: &Self::State, _start: &Self::State) -> HeuristicValue {
        ZERO_HEURISTIC
    }
}
