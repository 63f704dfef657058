use crate::entities::{Expense, RecordId};

use super::iso_date_model::ISODateModel;

#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct ExpenseModel {
    id: u64,
    date: ISODateModel,
    description: String,
    amount: f64,
}

impl From<Expense> for ExpenseModel {
    fn from(e: Expense) -> Self {
        ExpenseModel {
            id: e.id.0,
            date: e.date.into(),
            description: e.description,
            amount: e.amount,
        }
    }
}

impl Into<Expense> for ExpenseModel {
    fn into(self) -> Expense {
        Expense {
            id: RecordId(self.id),
            date: self.date.into(),
            description: self.description,
            amount: self.amount,
        }
    }
}
