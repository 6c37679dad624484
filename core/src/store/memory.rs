use crate::store::traits::Record;

/// Ordered in-memory collection of records, keyed by id.
///
/// Insertion order is preserved and defines iteration order; replacing a
/// record keeps its position.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record, refusing a duplicate id.
    ///
    /// Returns `false` and leaves the store unchanged if a record with the
    /// same id is already present.
    pub fn add(&mut self, record: T) -> bool {
        if self.position(record.id()).is_some() {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Removes the record with the given id. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() < initial_len
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Overwrites the stored record carrying the same id, keeping its
    /// position. Returns `false` if no such record exists.
    pub fn replace(&mut self, record: T) -> bool {
        match self.position(record.id()) {
            Some(pos) => {
                self.records[pos] = record;
                true
            }
            None => false,
        }
    }

    /// Snapshot of the current records in insertion order. Later mutation of
    /// the store does not affect a snapshot already handed out.
    pub fn list_all(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Entry {
        id: String,
        label: String,
    }

    impl Record for Entry {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn entry(id: &str, label: &str) -> Entry {
        Entry {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = RecordStore::new();
        assert!(store.add(entry("a", "first")));
        assert!(store.add(entry("b", "second")));
        assert!(store.add(entry("c", "third")));

        let ids: Vec<_> = store.list_all().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut store = RecordStore::new();
        assert!(store.add(entry("a", "first")));
        assert!(!store.add(entry("a", "imposter")));

        assert_eq!(store.count(), 1);
        assert_eq!(store.find_by_id("a").unwrap().label, "first");
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut store = RecordStore::new();
        store.add(entry("a", "first"));

        assert!(!store.remove("zzz"));
        assert_eq!(store.count(), 1);
        assert!(store.remove("a"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = RecordStore::new();
        store.add(entry("a", "first"));
        store.add(entry("b", "second"));
        store.add(entry("c", "third"));

        assert!(store.replace(entry("b", "revised")));

        let all = store.list_all();
        assert_eq!(all[1].id, "b");
        assert_eq!(all[1].label, "revised");
        assert_eq!(all[0].label, "first");
        assert_eq!(all[2].label, "third");
    }

    #[test]
    fn replace_missing_id_fails() {
        let mut store: RecordStore<Entry> = RecordStore::new();
        assert!(!store.replace(entry("ghost", "nope")));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut store = RecordStore::new();
        store.add(entry("a", "first"));
        let snapshot = store.list_all();

        store.remove("a");
        store.add(entry("b", "second"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "a");
    }
}
