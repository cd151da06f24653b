//! Side by side comparison of the search engines on one task, as printed by
//! the binary.

use crate::search::{
    search_engines::{SearchEngineName, SearchResult},
    Domain, SearchStats,
};
use std::fmt::{self, Display};
use tracing::info;

/// Outcome of one engine on the task.
#[derive(Debug, Clone)]
pub struct StrategyReport<S, A> {
    engine: SearchEngineName,
    result: SearchResult<S, A>,
    stats: SearchStats,
}

impl<S, A> StrategyReport<S, A> {
    pub fn new(engine: SearchEngineName, result: SearchResult<S, A>, stats: SearchStats) -> Self {
        Self {
            engine,
            result,
            stats,
        }
    }

    pub fn engine(&self) -> SearchEngineName {
        self.engine
    }

    pub fn result(&self) -> &SearchResult<S, A> {
        &self.result
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<S: Display, A> Display for StrategyReport<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.engine)?;
        match self.result.path() {
            Some(path) => {
                writeln!(f, "  Path: {}", path.to_state_string())?;
                writeln!(f, "  Path length: {}", path.len())?;
            }
            None => {
                writeln!(f, "  Path: none")?;
                writeln!(f, "  Path length: none")?;
            }
        }
        writeln!(f, "  Visited: {}", self.stats.visited_nodes)?;
        writeln!(f, "  Generated: {}", self.stats.generated_nodes)?;
        writeln!(f, "  Reopened: {}", self.stats.reopened_nodes)?;
        writeln!(f, "  Branching factor: {:.2}", self.stats.branching_factor())?;
        writeln!(f, "  Elapsed: {:.6} s", self.stats.elapsed.as_secs_f64())
    }
}

/// All requested engines run on the same start and goal.
#[derive(Debug, Clone)]
pub struct Report<S, A> {
    title: String,
    start: S,
    goal: S,
    strategies: Vec<StrategyReport<S, A>>,
}

impl<S: Clone, A> Report<S, A> {
    /// Run every engine in `engines`, in order, on a fresh search each.
    pub fn run<D>(
        title: impl Into<String>,
        domain: &D,
        start: &S,
        goal: &S,
        engines: &[SearchEngineName],
    ) -> Self
    where
        D: Domain<State = S, Action = A>,
    {
        let title = title.into();
        let strategies = engines
            .iter()
            .map(|&engine| {
                info!(task = title.as_str(), engine = engine.as_str(), "running");
                let (result, stats) = engine.search(domain, start, goal);
                StrategyReport::new(engine, result, stats)
            })
            .collect();
        Self {
            title,
            start: start.clone(),
            goal: goal.clone(),
            strategies,
        }
    }
}

impl<S, A> Report<S, A> {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn strategies(&self) -> &[StrategyReport<S, A>] {
        &self.strategies
    }
}

impl<S: Display, A> Display for Report<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Start: {}", self.start)?;
        writeln!(f, "Goal: {}", self.goal)?;
        for strategy in &self.strategies {
            writeln!(f)?;
            write!(f, "{}", strategy)?;
        }
        Ok(())
    }
}
