use std::collections::HashSet;
use std::sync::Arc;

use super::data::PhotoId;

/// The ordered list of gallery items
///
/// Every operation returns a new list and leaves `self` untouched, so the
/// view always renders against an immutable snapshot. The original list is
/// shared between snapshots and is the target of [`ItemList::restore`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemList {
    original: Arc<[PhotoId]>,
    items: Vec<PhotoId>,
}

impl ItemList {
    /// Create a list from the initial catalog
    ///
    /// Duplicate identifiers are dropped, keeping the first occurrence.
    pub fn new(initial: impl IntoIterator<Item = PhotoId>) -> Self {
        let mut seen = HashSet::new();
        let items: Vec<PhotoId> = initial
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        Self {
            original: items.clone().into(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PhotoId> {
        self.items.get(index)
    }

    /// Current position of an item
    pub fn position(&self, id: &PhotoId) -> Option<usize> {
        self.items.iter().position(|item| item == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoId> {
        self.items.iter()
    }

    /// The initial list this one was created from
    pub fn original(&self) -> &[PhotoId] {
        &self.original
    }

    /// Move `from_id` into the slot currently held by `to_id`
    ///
    /// Items in between shift by one towards the vacated slot. Returns an
    /// unchanged copy when the ids are equal or either one is absent.
    #[must_use]
    pub fn reorder(&self, from_id: &PhotoId, to_id: &PhotoId) -> Self {
        match (self.position(from_id), self.position(to_id)) {
            (Some(from), Some(to)) => self.reorder_index(from, to),
            _ => self.clone(),
        }
    }

    /// Index form of [`ItemList::reorder`]
    #[must_use]
    pub fn reorder_index(&self, from: usize, to: usize) -> Self {
        let mut next = self.clone();
        if from == to || from >= self.len() || to >= self.len() {
            return next;
        }

        let moved = next.items.remove(from);
        next.items.insert(to, moved);
        next
    }

    /// Keep only the items whose index does not satisfy `predicate`
    #[must_use]
    pub fn remove(&self, mut predicate: impl FnMut(usize) -> bool) -> Self {
        Self {
            original: Arc::clone(&self.original),
            items: self
                .items
                .iter()
                .enumerate()
                .filter(|(index, _)| !predicate(*index))
                .map(|(_, id)| id.clone())
                .collect(),
        }
    }

    /// Reset to the original list
    #[must_use]
    pub fn restore(&self) -> Self {
        Self {
            original: Arc::clone(&self.original),
            items: self.original.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<PhotoId> {
        names.iter().map(|name| PhotoId::from(*name)).collect()
    }

    fn list(names: &[&str]) -> ItemList {
        ItemList::new(ids(names))
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let items = list(&["a", "b", "a", "c", "b"]);
        assert_eq!(items.iter().cloned().collect::<Vec<_>>(), ids(&["a", "b", "c"]));
        assert_eq!(items.original(), ids(&["a", "b", "c"]).as_slice());
    }

    #[test]
    fn test_reorder_moves_into_target_slot() {
        let items = list(&["a", "b", "c", "d", "e"]);

        let forward = items.reorder(&"b".into(), &"d".into());
        assert_eq!(forward.iter().cloned().collect::<Vec<_>>(), ids(&["a", "c", "d", "b", "e"]));

        let backward = items.reorder(&"c".into(), &"a".into());
        assert_eq!(backward.iter().cloned().collect::<Vec<_>>(), ids(&["c", "a", "b", "d", "e"]));

        // The source snapshot is untouched
        assert_eq!(items.iter().cloned().collect::<Vec<_>>(), ids(&["a", "b", "c", "d", "e"]));
    }

    #[test]
    fn test_reorder_noops() {
        let items = list(&["a", "b", "c"]);
        assert_eq!(items.reorder(&"b".into(), &"b".into()), items);
        assert_eq!(items.reorder(&"x".into(), &"b".into()), items);
        assert_eq!(items.reorder(&"a".into(), &"x".into()), items);
        assert_eq!(items.reorder_index(0, 7), items);
    }

    #[test]
    fn test_reorder_and_back_restores_order() {
        let items = list(&["a", "b", "c", "d", "e", "f"]);
        for from in 0..items.len() {
            for to in 0..items.len() {
                if from == to {
                    continue;
                }
                let back = items.reorder_index(from, to).reorder_index(to, from);
                assert_eq!(back, items, "moving {from} -> {to} and back");
            }
        }
    }

    #[test]
    fn test_remove_by_index() {
        let items = list(&["a", "b", "c", "d"]);
        let remaining = items.remove(|index| index == 1 || index == 3);
        assert_eq!(remaining.iter().cloned().collect::<Vec<_>>(), ids(&["a", "c"]));
        assert_eq!(remaining.original(), items.original());
    }

    #[test]
    fn test_restore_after_mutations() {
        let items = list(&["a", "b", "c", "d", "e"]);
        let mutated = items
            .reorder_index(4, 0)
            .remove(|index| index % 2 == 0)
            .reorder_index(0, 1);
        assert_eq!(mutated.restore(), items);

        let emptied = items.remove(|_| true);
        assert!(emptied.is_empty());
        assert_eq!(emptied.restore(), items);
    }
}
