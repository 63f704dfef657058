use std::fmt;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared shape of everything kept in a record store: a flat value with a
/// unique, store-assigned id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable name of the record type, used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> RecordId;
}
