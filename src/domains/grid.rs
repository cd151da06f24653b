//! The fetch task: walk from the base to the item, pick it up and carry it
//! back to the base, on a rectangular grid with four-way moves.

use crate::{
    config::{self, ConfigError},
    search::{manhattan_distance, Domain, HeuristicValue, Transition},
};
use ordered_float::OrderedFloat;
use serde::Deserialize;
use std::{fmt, path::Path};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Size of the grid and the two special cells. Coordinates are `(x, y)` with
/// `y` growing downwards.
///
/// ```toml
/// width = 2
/// height = 2
/// base = [0, 0]
/// item = [1, 1]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    width: i32,
    height: i32,
    base: (i32, i32),
    item: (i32, i32),
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 2,
            height: 2,
            base: (0, 0),
            item: (1, 1),
        }
    }
}

impl GridConfig {
    pub fn new(
        width: i32,
        height: i32,
        base: (i32, i32),
        item: (i32, i32),
    ) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            base,
            item,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = config::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        for (name, (x, y)) in [("base", self.base), ("item", self.item)] {
            if !self.is_inside(x, y) {
                return Err(ConfigError::OutOfBounds {
                    name,
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        Ok(())
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn base(&self) -> (i32, i32) {
        self.base
    }

    pub fn item(&self) -> (i32, i32) {
        self.item
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchState {
    pub x: i32,
    pub y: i32,
    pub carrying: bool,
}

impl FetchState {
    pub fn new(x: i32, y: i32, carrying: bool) -> Self {
        Self { x, y, carrying }
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let load = if self.carrying { "carrying" } else { "empty" };
        write!(f, "({}, {}, {})", self.x, self.y, load)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchAction {
    Move(Direction),
    Pickup,
}

impl fmt::Display for FetchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchAction::Move(direction) => write!(f, "move_{}", direction),
            FetchAction::Pickup => write!(f, "pickup"),
        }
    }
}

/// The fetch task as a search [`Domain`]. The goal is to stand on the base
/// carrying the item.
#[derive(Debug, Clone, Default)]
pub struct GridDomain {
    config: GridConfig,
}

impl GridDomain {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Standing on the base, empty-handed.
    pub fn start_state(&self) -> FetchState {
        let (x, y) = self.config.base;
        FetchState::new(x, y, false)
    }

    /// Standing on the base with the item.
    pub fn goal_state(&self) -> FetchState {
        let (x, y) = self.config.base;
        FetchState::new(x, y, true)
    }

    /// Lower bound on the steps from `from` to `to` when the only way to
    /// change `carrying` is picking the item up.
    fn estimate(&self, from: &FetchState, to: &FetchState) -> HeuristicValue {
        match (from.carrying, to.carrying) {
            (false, true) => {
                manhattan_distance(from.position(), self.config.item)
                    + manhattan_distance(self.config.item, to.position())
            }
            (true, false) => OrderedFloat(f64::INFINITY),
            _ => manhattan_distance(from.position(), to.position()),
        }
    }
}

impl Domain for GridDomain {
    type State = FetchState;
    type Action = FetchAction;

    fn successors(&self, state: &FetchState) -> Vec<Transition<FetchState, FetchAction>> {
        let mut transitions = Vec::new();
        for direction in Direction::iter() {
            let (dx, dy) = direction.offset();
            let (x, y) = (state.x + dx, state.y + dy);
            if self.config.is_inside(x, y) {
                transitions.push(Transition::new(
                    FetchState::new(x, y, state.carrying),
                    FetchAction::Move(direction),
                ));
            }
        }
        if state.position() == self.config.item && !state.carrying {
            transitions.push(Transition::new(
                FetchState::new(state.x, state.y, true),
                FetchAction::Pickup,
            ));
        }
        transitions
    }

    fn predecessors(&self, state: &FetchState) -> Vec<Transition<FetchState, FetchAction>> {
        let mut transitions = Vec::new();
        for direction in Direction::iter() {
            let (dx, dy) = direction.offset();
            let (x, y) = (state.x - dx, state.y - dy);
            if self.config.is_inside(x, y) {
                transitions.push(Transition::new(
                    FetchState::new(x, y, state.carrying),
                    FetchAction::Move(direction),
                ));
            }
        }
        if state.position() == self.config.item && state.carrying {
            transitions.push(Transition::new(
                FetchState::new(state.x, state.y, false),
                FetchAction::Pickup,
            ));
        }
        transitions
    }

    fn is_goal(&self, state: &FetchState) -> bool {
        *state == self.goal_state()
    }

    fn heuristic(&self, state: &FetchState) -> HeuristicValue {
        self.estimate(state, &self.goal_state())
    }

    fn backward_heuristic(&self, state: &FetchState, start: &FetchState) -> HeuristicValue {
        self.estimate(start, state)
    }
}
