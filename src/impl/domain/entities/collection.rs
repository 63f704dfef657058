use super::record::Record;

/// The full, ordered contents of one record store, loaded wholesale for the
/// duration of a single command.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R: Record> {
    pub(crate) records: Vec<R>,
}

// --

impl<R: Record> Collection<R> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }
}

impl<R: Record> From<Vec<R>> for Collection<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}
