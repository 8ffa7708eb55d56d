use std::collections::BTreeSet;

/// Indices of the items marked for a batch action
///
/// Indices refer to positions in the item list at the time of the most recent
/// mutation, so every reorder must be followed by
/// [`Selection::remap_after_reorder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the index if absent, remove it if present
    pub fn toggle(&mut self, index: usize) {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Follow every selected item to its position after moving `from` to `to`
    ///
    /// The moved item lands on `to`; the items between the two slots shift by
    /// one towards `from`.
    pub fn remap_after_reorder(&mut self, from: usize, to: usize) {
        if from == to || self.indices.is_empty() {
            return;
        }

        self.indices = self
            .indices
            .iter()
            .map(|&index| moved_position(index, from, to))
            .collect();
    }
}

/// Position of `index` after an array move of `from` to `to`
fn moved_position(index: usize, from: usize, to: usize) -> usize {
    if index == from {
        to
    } else if from < to && index > from && index <= to {
        index - 1
    } else if to < from && index >= to && index < from {
        index + 1
    } else {
        index
    }
}
