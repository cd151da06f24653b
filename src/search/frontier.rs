//! Open lists used by the search engines.

use crate::search::HeuristicValue;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque, hash::Hash};

/// First-in first-out open list for breadth-first expansion.
#[derive(Debug)]
pub struct FifoFrontier<I> {
    queue: VecDeque<I>,
}

impl<I> Default for FifoFrontier<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> FifoFrontier<I> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, item: I) {
        self.queue.push_back(item);
    }

    pub fn pop(&mut self) -> Option<I> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Min-priority open list. Every push is stamped with an increasing sequence
/// number, and among entries with equal priority the one pushed first is
/// popped first. This keeps best-first searches reproducible run to run.
///
/// Pushing an item that is already queued replaces its entry, priority and
/// sequence number included, so each item is queued at most once.
#[derive(Debug)]
pub struct PriorityFrontier<I: Hash + Eq> {
    queue: PriorityQueue<I, Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl<I: Hash + Eq> Default for PriorityFrontier<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq> PriorityFrontier<I> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: I, priority: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(item, Reverse((priority, sequence)));
    }

    /// Remove and return the item with the lowest priority, together with
    /// that priority.
    pub fn pop(&mut self) -> Option<(I, HeuristicValue)> {
        self.queue
            .pop()
            .map(|(item, Reverse((priority, _)))| (item, priority))
    }

    pub fn contains(&self, item: &I) -> bool {
        self.queue.get(item).is_some()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
