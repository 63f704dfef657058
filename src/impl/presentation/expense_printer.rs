use iso_currency::Currency;

use crate::entities::{Expense, ExpenseSummary, RecordId};

use super::utils::format_amount;

pub struct ExpensePrinter {
    currency: Currency,
}

impl ExpensePrinter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn print_list(&self, expenses: &[Expense]) -> String {
        let mut output = String::new();
        output.push_str("ID  Date       Description       Amount\n");
        output.push_str("--  ---------- ----------------- ------\n");
        for e in expenses {
            output.push_str(&format!(
                "{:<3}{:<12}{:<20}{}\n",
                e.id.to_string(),
                e.date.format("%Y-%m-%d").to_string(),
                e.description,
                format_amount(e.amount, self.currency),
            ));
        }
        output
    }

    pub fn print_summary(&self, summary: &ExpenseSummary) -> String {
        let total = format_amount(summary.total, self.currency);
        match summary.month {
            Some(month) => format!("Total expenses for {}: {}", month.name(), total),
            None => format!("Total expenses: {}", total),
        }
    }

    pub fn print_added(&self, id: RecordId) -> String {
        format!("Expense added successfully (ID: {})", id)
    }

    pub fn print_updated(&self) -> String {
        "Expense updated successfully".to_string()
    }

    pub fn print_deleted(&self) -> String {
        "Expense deleted successfully".to_string()
    }

    pub fn print_not_found(&self, id: RecordId) -> String {
        format!("Expense with ID {} not found", id)
    }

    pub fn print_no_records(&self) -> String {
        "No expenses found.".to_string()
    }

    pub fn print_invalid_month(&self, raw: &str) -> String {
        format!("Invalid month: '{}'. Use a number between 1 and 12.", raw)
    }
}
