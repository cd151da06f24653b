use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Counters kept while a search runs. Logs progress every so often and turns
/// into a [`SearchStats`] once the search is over.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Name of the search engine, used in log lines
    engine: &'static str,
    /// Number of nodes popped from the open list and expanded
    visited_nodes: u64,
    /// Number of transitions produced by expansions, duplicates included
    generated_nodes: u64,
    /// Number of closed nodes put back on the open list after a cheaper path
    /// to them was found
    reopened_nodes: u64,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new(engine: &'static str) -> Self {
        debug!(engine, "starting search");
        Self {
            engine,
            visited_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_visited_nodes(&mut self) {
        self.visited_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as u64;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            engine = self.engine,
            visited_nodes = self.visited_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
        );
    }

    pub fn finalise_search(self) -> SearchStats {
        let elapsed = self.search_start_time.elapsed();
        debug!(engine = self.engine, "finalising search");
        self.log();
        info!(engine = self.engine, search_duration = elapsed.as_secs_f64());
        SearchStats {
            visited_nodes: self.visited_nodes,
            generated_nodes: self.generated_nodes,
            reopened_nodes: self.reopened_nodes,
            elapsed,
        }
    }
}

/// Final statistics of one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStats {
    pub visited_nodes: u64,
    pub generated_nodes: u64,
    pub reopened_nodes: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    /// Average number of transitions generated per visited node, 0 if nothing
    /// was visited.
    pub fn branching_factor(&self) -> f64 {
        if self.visited_nodes == 0 {
            0.
        } else {
            self.generated_nodes as f64 / self.visited_nodes as f64
        }
    }

    /// Whether two runs did the same work, ignoring timing.
    pub fn same_counts(&self, other: &SearchStats) -> bool {
        self.visited_nodes == other.visited_nodes
            && self.generated_nodes == other.generated_nodes
            && self.reopened_nodes == other.reopened_nodes
    }
}
