use crate::search::{
    search_engines::{AStar, BackwardGreedy, Bfs, BidirectionalBfs},
    Domain, Path, SearchStats,
};
use std::fmt::{self, Display};
use strum_macros::EnumIter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<S, A> {
    /// The search was successful
    Success(Path<S, A>),
    /// The search exhausted its frontier without reaching its target. All
    /// engines here are complete on finite state spaces, so no path exists.
    ProvablyUnsolvable,
}

impl<S, A> SearchResult<S, A> {
    pub fn path(&self) -> Option<&Path<S, A>> {
        match self {
            SearchResult::Success(path) => Some(path),
            SearchResult::ProvablyUnsolvable => None,
        }
    }

    pub fn into_path(self) -> Option<Path<S, A>> {
        match self {
            SearchResult::Success(path) => Some(path),
            SearchResult::ProvablyUnsolvable => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }
}

pub type SearchOutcome<D> = (
    SearchResult<<D as Domain>::State, <D as Domain>::Action>,
    SearchStats,
);

/// A search engine looks for a path from `start` to `goal` in a domain. Each
/// call is independent: all bookkeeping is created inside `search` and
/// dropped when it returns.
pub trait SearchEngine {
    fn search<D: Domain>(&self, domain: &D, start: &D::State, goal: &D::State) -> SearchOutcome<D>;
}

#[derive(clap::ValueEnum, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth-first search from the start")]
    Bfs,
    #[clap(help = "A* search from the start, optimal for admissible heuristics")]
    Astar,
    #[clap(help = "Greedy best-first search from the goal back to the start")]
    BackwardGreedy,
    #[clap(help = "Breadth-first search from both ends, meeting in the middle")]
    Bidirectional,
}

impl SearchEngineName {
    pub fn search<D: Domain>(
        &self,
        domain: &D,
        start: &D::State,
        goal: &D::State,
    ) -> SearchOutcome<D> {
        match self {
            SearchEngineName::Bfs => Bfs::new().search(domain, start, goal),
            SearchEngineName::Astar => AStar::new().search(domain, start, goal),
            SearchEngineName::BackwardGreedy => BackwardGreedy::new().search(domain, start, goal),
            SearchEngineName::Bidirectional => BidirectionalBfs::new().search(domain, start, goal),
        }
    }

    /// Name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngineName::Bfs => "bfs",
            SearchEngineName::Astar => "astar",
            SearchEngineName::BackwardGreedy => "backward-greedy",
            SearchEngineName::Bidirectional => "bidirectional",
        }
    }
}

impl Display for SearchEngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            SearchEngineName::Bfs => "Forward search (BFS)",
            SearchEngineName::Astar => "A* search",
            SearchEngineName::BackwardGreedy => "Backward greedy search",
            SearchEngineName::Bidirectional => "Bidirectional search (BFS)",
        };
        write!(f, "{}", title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn engines_iterate_in_report_order() {
        let names: Vec<_> = SearchEngineName::iter().map(|name| name.as_str()).collect();
        assert_eq!(names, vec!["bfs", "astar", "backward-greedy", "bidirectional"]);
    }

    #[test]
    fn result_exposes_path() {
        let result: SearchResult<u8, ()> = SearchResult::Success(Path::trivial(1));
        assert!(result.is_success());
        assert_eq!(result.path().map(|path| path.len()), Some(0));

        let result: SearchResult<u8, ()> = SearchResult::ProvablyUnsolvable;
        assert!(result.path().is_none());
        assert!(result.into_path().is_none());
    }
}
