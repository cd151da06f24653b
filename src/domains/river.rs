//! The farmer, wolf, goat and cabbage puzzle. The farmer has to get everyone
//! across the river in a boat that holds him and at most one passenger,
//! without leaving the wolf alone with the goat or the goat alone with the
//! cabbage.

use crate::search::{Domain, HeuristicValue, Transition};
use ordered_float::OrderedFloat;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    pub fn opposite(self) -> Self {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bank::Left => write!(f, "L"),
            Bank::Right => write!(f, "R"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Cargo {
    Wolf,
    Goat,
    Cabbage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiverState {
    pub farmer: Bank,
    pub wolf: Bank,
    pub goat: Bank,
    pub cabbage: Bank,
}

impl RiverState {
    /// Everyone on the same bank.
    pub fn all_on(bank: Bank) -> Self {
        Self {
            farmer: bank,
            wolf: bank,
            goat: bank,
            cabbage: bank,
        }
    }

    pub fn bank_of(&self, cargo: Cargo) -> Bank {
        match cargo {
            Cargo::Wolf => self.wolf,
            Cargo::Goat => self.goat,
            Cargo::Cabbage => self.cabbage,
        }
    }

    fn bank_of_mut(&mut self, cargo: Cargo) -> &mut Bank {
        match cargo {
            Cargo::Wolf => &mut self.wolf,
            Cargo::Goat => &mut self.goat,
            Cargo::Cabbage => &mut self.cabbage,
        }
    }

    /// Nobody gets eaten while the farmer is on the other bank.
    pub fn is_safe(&self) -> bool {
        self.goat == self.farmer || (self.wolf != self.goat && self.cabbage != self.goat)
    }

    /// The state after `crossing`, or `None` when the passenger is not on
    /// the farmer's bank.
    fn cross(&self, crossing: Crossing) -> Option<Self> {
        let mut next = *self;
        if let Crossing::With(cargo) = crossing {
            if self.bank_of(cargo) != self.farmer {
                return None;
            }
            *next.bank_of_mut(cargo) = self.farmer.opposite();
        }
        next.farmer = self.farmer.opposite();
        Some(next)
    }
}

impl fmt::Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.farmer, self.wolf, self.goat, self.cabbage
        )
    }
}

/// One boat trip. The farmer always rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossing {
    Alone,
    With(Cargo),
}

impl Crossing {
    fn all() -> impl Iterator<Item = Crossing> {
        std::iter::once(Crossing::Alone).chain(Cargo::iter().map(Crossing::With))
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crossing::Alone => write!(f, "cross_alone"),
            Crossing::With(cargo) => write!(f, "cross_with_{}", cargo),
        }
    }
}

/// The puzzle as a search [`Domain`], from everyone on the left bank to
/// everyone on the right bank.
///
/// Unsafe states can be generated by nothing and lead nowhere, so both
/// directions of the transition relation only ever touch safe states.
#[derive(Debug, Clone, Default)]
pub struct RiverCrossing {}

impl RiverCrossing {
    pub fn new() -> Self {
        Self {}
    }

    pub fn start_state(&self) -> RiverState {
        RiverState::all_on(Bank::Left)
    }

    pub fn goal_state(&self) -> RiverState {
        RiverState::all_on(Bank::Right)
    }

    /// Every trip moves at most one passenger, and at least one trip is
    /// needed while the farmer is on the wrong bank.
    fn estimate(state: &RiverState, target: &RiverState) -> HeuristicValue {
        let misplaced = Cargo::iter()
            .filter(|&cargo| state.bank_of(cargo) != target.bank_of(cargo))
            .count();
        let farmer = usize::from(state.farmer != target.farmer);
        OrderedFloat(misplaced.max(farmer) as f64)
    }

    fn safe_crossings(state: &RiverState) -> Vec<Transition<RiverState, Crossing>> {
        if !state.is_safe() {
            return vec![];
        }
        Crossing::all()
            .filter_map(|crossing| {
                state
                    .cross(crossing)
                    .filter(RiverState::is_safe)
                    .map(|next| Transition::new(next, crossing))
            })
            .collect()
    }
}

impl Domain for RiverCrossing {
    type State = RiverState;
    type Action = Crossing;

    fn successors(&self, state: &RiverState) -> Vec<Transition<RiverState, Crossing>> {
        Self::safe_crossings(state)
    }

    /// Undoing a trip is the same trip in the other direction, so the
    /// predecessors are the states reached by each safe crossing.
    fn predecessors(&self, state: &RiverState) -> Vec<Transition<RiverState, Crossing>> {
        Self::safe_crossings(state)
    }

    fn is_goal(&self, state: &RiverState) -> bool {
        *state == self.goal_state()
    }

    fn heuristic(&self, state: &RiverState) -> HeuristicValue {
        Self::estimate(state, &self.goal_state())
    }

    fn backward_heuristic(&self, state: &RiverState, start: &RiverState) -> HeuristicValue {
        Self::estimate(state, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::bfs;
    use crate::test_utils::*;

    fn state(farmer: Bank, wolf: Bank, goat: Bank, cabbage: Bank) -> RiverState {
        RiverState {
            farmer,
            wolf,
            goat,
            cabbage,
        }
    }

    #[test]
    fn only_the_goat_can_go_first() {
        let domain = RiverCrossing::new();
        let successors = domain.successors(&domain.start_state());
        assert_eq!(successors.len(), 1);
        assert_eq!(successors[0].action, Crossing::With(Cargo::Goat));
        assert_eq!(
            successors[0].state,
            state(Bank::Right, Bank::Left, Bank::Right, Bank::Left)
        );
    }

    #[test]
    fn unsafe_states_are_dead_ends() {
        use Bank::*;
        let domain = RiverCrossing::new();
        let wolf_and_goat = state(Right, Left, Left, Right);
        let goat_and_cabbage = state(Left, Right, Right, Right);
        for unsafe_state in [wolf_and_goat, goat_and_cabbage] {
            assert!(!unsafe_state.is_safe());
            assert!(domain.successors(&unsafe_state).is_empty());
            assert!(domain.predecessors(&unsafe_state).is_empty());
        }
        assert!(state(Left, Right, Left, Right).is_safe());
    }

    #[test]
    fn passenger_must_share_the_farmers_bank() {
        use Bank::*;
        let domain = RiverCrossing::new();
        let successors = domain.successors(&state(Right, Left, Right, Left));
        let crossings: Vec<_> = successors.iter().map(|t| t.action).collect();
        assert_eq!(crossings, vec![Crossing::Alone, Crossing::With(Cargo::Goat)]);
    }

    #[test]
    fn predecessors_invert_successors() {
        let domain = RiverCrossing::new();
        assert_inverse_consistent(&domain, &domain.start_state());
        assert_eq!(reachable_states(&domain, &domain.start_state()).len(), 10);
    }

    #[test]
    fn heuristic_never_overestimates() {
        let domain = RiverCrossing::new();
        let goal = domain.goal_state();
        let start = domain.start_state();
        for state in reachable_states(&domain, &start) {
            let (result, _) = bfs(&domain, &state, &goal);
            let distance = result.path().unwrap().len() as f64;
            assert!(domain.heuristic(&state).into_inner() <= distance);
            assert!(domain.backward_heuristic(&state, &state) == OrderedFloat(0.));
        }
        assert_eq!(domain.heuristic(&start), OrderedFloat(3.));
        assert_eq!(domain.heuristic(&goal), OrderedFloat(0.));
    }

    #[test]
    fn state_display() {
        use Bank::*;
        assert_eq!(state(Right, Left, Right, Left).to_string(), "(R, L, R, L)");
        assert_eq!(Crossing::With(Cargo::Cabbage).to_string(), "cross_with_cabbage");
        assert_eq!(Crossing::Alone.to_string(), "cross_alone");
    }
}
