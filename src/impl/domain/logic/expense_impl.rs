use chrono::{Datelike as _, Month};

use crate::entities::{Collection, Expense, ExpenseSummary, ExpenseUpdate};

impl Expense {
    pub(crate) fn apply(&mut self, update: ExpenseUpdate) {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
    }

    pub(crate) fn in_month(&self, month: Month) -> bool {
        self.date.month() == month.number_from_month()
    }
}

impl Collection<Expense> {
    /// Total amount over all expenses, or over those dated in the given
    /// calendar month of any year.
    pub(crate) fn summarize(&self, month: Option<Month>) -> ExpenseSummary {
        let (total, count) = self
            .records
            .iter()
            .filter(|e| month.map_or(true, |m| e.in_month(m)))
            .fold((0.0, 0), |(total, count), e| (total + e.amount, count + 1));
        ExpenseSummary {
            month,
            total,
            count,
        }
    }
}
