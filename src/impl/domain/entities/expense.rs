use chrono::{Month, NaiveDate};

use super::record::{Record, RecordId};

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: RecordId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
}

/// Field overwrites for an existing expense. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Calendar month the total was restricted to (across all years), if any.
    pub month: Option<Month>,
    pub total: f64,
    pub count: usize,
}

// --

impl Record for Expense {
    const KIND: &'static str = "expense";

    fn id(&self) -> RecordId {
        self.id
    }
}
