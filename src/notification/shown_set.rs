//! Record of identifiers that have already been displayed

use std::collections::{HashSet, VecDeque};

/// Set of displayed notification identifiers.
///
/// Unbounded unless a capacity is given, in which case the oldest
/// identifiers are forgotten first.
#[derive(Debug, Default)]
pub struct ShownSet {
    ids: HashSet<String>,
    order: VecDeque<String>,
    capacity: Option<usize>,
}

impl ShownSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Record an identifier. Returns false if it was already present.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }

        if let Some(capacity) = self.capacity {
            // Capacity 0 disables remembering entirely
            if capacity == 0 {
                return true;
            }
            while self.order.len() >= capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.ids.remove(&oldest);
                }
            }
        }

        self.ids.insert(id.to_string());
        self.order.push_back(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
