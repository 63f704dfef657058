use crate::entities::{Collection, Record, RecordId};

impl<R: Record> Collection<R> {
    /// One past the highest id currently present, or 1 for an empty
    /// collection. Recomputed from the current contents, so the id of a
    /// deleted maximum record is handed out again.
    ///
    /// `None` if the highest id is already `u64::MAX`.
    pub(crate) fn next_id(&self) -> Option<RecordId> {
        let max = self.records.iter().map(|r| r.id().0).max().unwrap_or(0);
        max.checked_add(1).map(RecordId)
    }

    /// Appends the record built for the next id. Nothing is appended when no
    /// id is left.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(RecordId) -> R) -> Option<RecordId> {
        let id = self.next_id()?;
        self.records.push(build(id));
        Some(id)
    }

    /// Applies `apply` to the record with the given id. Returns false if no
    /// record matched, in which case nothing was touched.
    pub(crate) fn modify(&mut self, id: RecordId, apply: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                apply(record);
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given id, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    pub(crate) fn matching(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::entities::{Collection, Expense, RecordId};

    fn expense(id: u64) -> Expense {
        Expense {
            id: RecordId(id),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: format!("expense {id}"),
            amount: id as f64,
        }
    }

    fn ids(c: &Collection<Expense>) -> Vec<u64> {
        c.records().iter().map(|e| e.id.0).collect()
    }

    #[test]
    fn next_id_starts_at_one() {
        let c: Collection<Expense> = Collection::empty();
        assert_eq!(c.next_id(), Some(RecordId(1)));
    }

    #[test]
    fn next_id_is_none_once_the_max_id_is_taken() {
        let mut c: Collection<Expense> = vec![expense(3), expense(u64::MAX)].into();
        assert_eq!(c.next_id(), None);
        assert_eq!(c.insert_with(|id| expense(id.0)), None);
        assert_eq!(ids(&c), vec![3, u64::MAX]);
    }

    #[test]
    fn next_id_follows_max_not_len() {
        let c: Collection<Expense> = vec![expense(7), expense(2)].into();
        assert_eq!(c.next_id(), Some(RecordId(8)));
    }

    #[test]
    fn deleted_max_id_is_reassigned() {
        let mut c: Collection<Expense> = vec![expense(1), expense(2), expense(3)].into();
        assert!(c.remove(RecordId(3)));
        assert_eq!(c.insert_with(|id| expense(id.0)), Some(RecordId(3)));
    }

    #[test]
    fn remove_keeps_survivor_order() {
        let mut c: Collection<Expense> = vec![expense(1), expense(2), expense(3)].into();
        assert!(c.remove(RecordId(2)));
        assert_eq!(ids(&c), vec![1, 3]);
        assert!(!c.remove(RecordId(2)));
        assert_eq!(ids(&c), vec![1, 3]);
    }

    #[test]
    fn modify_touches_only_the_match() {
        let mut c: Collection<Expense> = vec![expense(1), expense(2)].into();
        assert!(c.modify(RecordId(2), |e| e.description = "changed".into()));
        assert_eq!(c.records()[0], expense(1));
        assert_eq!(c.records()[1].description, "changed");
        assert!(!c.modify(RecordId(9), |e| e.amount = 0.0));
    }

    #[test]
    fn matching_preserves_collection_order() {
        let c: Collection<Expense> = vec![expense(5), expense(1), expense(4)].into();
        let odd = c.matching(|e| e.id.0 % 2 == 1);
        assert_eq!(odd, vec![expense(5), expense(1)]);
    }
}
