//! Bounded recency memory of visited tours.

use std::collections::{HashMap, VecDeque};

/// Fixed-capacity FIFO of recently visited tours.
///
/// Pushing onto a full list evicts the oldest entry. Membership is exact
/// sequence equality, not cost equality. Both `push` and `contains` are
/// O(N) in the tour length and O(1) in the list length.
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    queue: VecDeque<Vec<usize>>,
    // multiplicity of each tour currently in `queue`
    counts: HashMap<Vec<usize>, usize>,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity.min(1024)),
            counts: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Appends `tour`, evicting the oldest entry when full.
    ///
    /// Returns the evicted tour, if any. A zero-capacity list stores nothing.
    pub fn push(&mut self, tour: Vec<usize>) -> Option<Vec<usize>> {
        if self.capacity == 0 {
            return None;
        }

        let evicted = if self.queue.len() >= self.capacity {
            self.queue.pop_front().inspect(|old| self.forget(old))
        } else {
            None
        };

        *self.counts.entry(tour.clone()).or_insert(0) += 1;
        self.queue.push_back(tour);
        evicted
    }

    pub fn contains(&self, tour: &[usize]) -> bool {
        self.counts.contains_key(tour)
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.queue.iter().map(Vec::as_slice)
    }

    fn forget(&mut self, tour: &[usize]) {
        if let Some(count) = self.counts.get_mut(tour) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(tour);
            }
        }
    }
}
