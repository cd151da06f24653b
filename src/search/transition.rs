//! A transition connects a state to one of its neighbours. Forward expansion
//! yields the resulting state, backward expansion yields the preceding state.
//! In both cases the action is the forward action, i.e. the one that moves
//! from the earlier state to the later one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S, A> {
    pub state: S,
    pub action: A,
}

impl<S, A> Transition<S, A> {
    pub fn new(state: S, action: A) -> Self {
        Self { state, action }
    }
}
