//! A path is a sequence of states joined by transitions, from the start of a
//! search to a goal. This module provides the [`Path`] struct.

use itertools::Itertools;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S, A> {
    states: Vec<S>,
    /// `actions[i]` takes `states[i]` to `states[i + 1]`
    actions: Vec<A>,
}

impl<S, A> Path<S, A> {
    pub fn new(states: Vec<S>, actions: Vec<A>) -> Self {
        assert!(!states.is_empty(), "A path has at least one state");
        assert_eq!(
            states.len(),
            actions.len() + 1,
            "A path has one action between every two consecutive states"
        );
        Self { states, actions }
    }

    /// The path that starts at its goal.
    pub fn trivial(state: S) -> Self {
        Self {
            states: vec![state],
            actions: vec![],
        }
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    pub fn start(&self) -> &S {
        &self.states[0]
    }

    pub fn end(&self) -> &S {
        &self.states[self.states.len() - 1]
    }

    /// Number of transitions in the path, one less than the number of
    /// states.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the path has no transitions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub(crate) fn reverse(&mut self) {
        self.states.reverse();
        self.actions.reverse();
    }
}

impl<S: PartialEq, A> Path<S, A> {
    /// Append `tail` to this path. `tail` must start at the state this path
    /// ends at, and that state appears once in the result.
    pub fn join(mut self, tail: Path<S, A>) -> Self {
        assert!(
            self.end() == tail.start(),
            "Joined paths must share the meeting state"
        );
        self.states.extend(tail.states.into_iter().skip(1));
        self.actions.extend(tail.actions);
        self
    }
}

impl<S: Display, A> Path<S, A> {
    /// Render the states as `[s0, s1, ...]`.
    pub fn to_state_string(&self) -> String {
        format!("[{}]", self.states.iter().join(", "))
    }
}

impl<S, A> IntoIterator for Path<S, A> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}
