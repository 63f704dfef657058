use super::record::RecordId;

/// Result of a single store command that is not an I/O failure.
///
/// Every variant other than `Success` leaves the persisted store untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The query ran but matched nothing (or the store is empty).
    NoRecords,
    NotFound(RecordId),
    InvalidStatus(String),
    InvalidMonth(String),
}

impl<T> Outcome<T> {
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(t) => Some(t),
            _ => None,
        }
    }
}
