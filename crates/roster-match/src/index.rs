//! Normalized-key lookup over the master roster.

use std::collections::HashMap;

use tracing::warn;

use roster_model::RosterEntry;

use crate::normalize::normalize;

/// Lookup structure built once per reconciliation run.
///
/// Maps each entry's normalized key to the entry itself. Two roster rows can
/// normalize to the same key; the later row overwrites the earlier one
/// (last-write-wins, a documented limitation of the roster format), while
/// the key keeps its original scan position so the fuzzy stage always walks
/// candidates in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct MasterIndex {
    slots: Vec<(String, RosterEntry)>,
    by_key: HashMap<String, usize>,
}

impl MasterIndex {
    /// Index a roster. Total over any roster, including an empty one.
    #[must_use]
    pub fn build(roster: &[RosterEntry]) -> Self {
        let mut index = Self {
            slots: Vec::with_capacity(roster.len()),
            by_key: HashMap::with_capacity(roster.len()),
        };
        for entry in roster {
            let key = normalize(&entry.name);
            match index.by_key.get(&key) {
                Some(&slot) => {
                    warn!(
                        key = %key,
                        kept = index.slots[slot].1.position,
                        replaced_by = entry.position,
                        "duplicate normalized key in roster, keeping later entry"
                    );
                    index.slots[slot].1 = entry.clone();
                }
                None => {
                    index.by_key.insert(key.clone(), index.slots.len());
                    index.slots.push((key, entry.clone()));
                }
            }
        }
        index
    }

    /// Exact lookup by normalized key. O(1) average case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RosterEntry> {
        self.by_key.get(key).map(|&slot| &self.slots[slot].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Candidate pairs in first-insertion order, for the fuzzy stage.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RosterEntry)> {
        self.slots.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<RosterEntry> {
        RosterEntry::sequence(names.iter().copied())
    }

    #[test]
    fn indexes_by_normalized_key() {
        let index = MasterIndex::build(&roster(&["John Smith", "Jane Doe"]));
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("johnsmith").unwrap().name, "John Smith");
        assert_eq!(index.get("janedoe").unwrap().position, 1);
        assert!(index.get("nobody").is_none());
    }

    #[test]
    fn later_entry_wins_on_key_collision() {
        let index = MasterIndex::build(&roster(&["J. Smith", "j smith"]));
        assert_eq!(index.len(), 1);
        let kept = index.get("jsmith").unwrap();
        assert_eq!(kept.name, "j smith");
        assert_eq!(kept.position, 1);
    }

    #[test]
    fn collision_preserves_first_insertion_order() {
        let index = MasterIndex::build(&roster(&["Alpha", "Beta", "ALPHA"]));
        let keys: Vec<&str> = index.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["alpha", "beta"]);
        // Value was replaced in place.
        assert_eq!(index.get("alpha").unwrap().name, "ALPHA");
    }

    #[test]
    fn empty_roster_builds_empty_index() {
        let index = MasterIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
