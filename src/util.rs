use std::str::FromStr as _;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    config::StoreConfig,
    data::models::{
        amount_model::AmountModel, month_model::MonthModel, task_status_model::TaskStatusModel,
    },
    domain::usecases::{
        expense_usecase::{ExpenseUsecase as _, ExpenseUsecaseImpl},
        task_usecase::{TaskUsecase as _, TaskUsecaseImpl},
    },
    entities::{
        Clock, Expense, ExpenseSummary, ExpenseUpdate, Outcome, RecordId, SystemClock, Task,
        TaskStatus, TaskUpdate,
    },
    errors::{InvalidAmount, InvalidIsoCurrencyCode},
};

/// Expense list kept in a single JSON document.
///
/// Every call is one complete command: the document is read, one operation is
/// applied, and the document is rewritten only if the operation changed
/// something.
pub struct ExpenseTracker<C: Clock = SystemClock> {
    usecase: ExpenseUsecaseImpl<C>,
}

impl ExpenseTracker {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ExpenseTracker<C> {
    pub fn with_clock(config: StoreConfig, clock: C) -> Self {
        Self {
            usecase: ExpenseUsecaseImpl::new(config, clock),
        }
    }

    /// Appends a new expense dated today and returns its id.
    pub async fn add(
        &self,
        description: impl Into<String>,
        amount: f64,
    ) -> Result<RecordId, ServerError> {
        let amount = checked_amount(amount)?;
        self.usecase.add(description.into(), amount).await
    }

    pub async fn update(
        &self,
        id: u64,
        description: Option<String>,
        amount: Option<f64>,
    ) -> Result<Outcome<()>, ServerError> {
        let amount = amount.map(checked_amount).transpose()?;
        self.usecase
            .update(RecordId(id), ExpenseUpdate { description, amount })
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Outcome<()>, ServerError> {
        self.usecase.delete(RecordId(id)).await
    }

    pub async fn list(&self) -> Result<Outcome<Vec<Expense>>, ServerError> {
        self.usecase.list().await
    }

    /// Total over all expenses, or over one calendar month (1-12, any year).
    /// A blank month counts as no month.
    pub async fn summary(
        &self,
        month: Option<&str>,
    ) -> Result<Outcome<ExpenseSummary>, ServerError> {
        let month = month.filter(|m| !m.trim().is_empty());
        let month = match month.map(MonthModel::from_str).transpose() {
            Ok(month) => month.map(Into::into),
            Err(e) => {
                tracing::debug!(error = ?e, "rejected month");
                return Ok(Outcome::InvalidMonth(month.unwrap_or_default().to_string()));
            }
        };
        Ok(Outcome::Success(self.usecase.summary(month).await?))
    }
}

/// Task list kept in a single JSON document.
pub struct TaskTracker<C: Clock = SystemClock> {
    usecase: TaskUsecaseImpl<C>,
}

impl TaskTracker {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TaskTracker<C> {
    pub fn with_clock(config: StoreConfig, clock: C) -> Self {
        Self {
            usecase: TaskUsecaseImpl::new(config, clock),
        }
    }

    /// Appends a new `todo` task and returns its id.
    pub async fn add(&self, description: impl Into<String>) -> Result<RecordId, ServerError> {
        self.usecase.add(description.into()).await
    }

    pub async fn update(
        &self,
        id: u64,
        description: impl Into<String>,
    ) -> Result<Outcome<()>, ServerError> {
        self.usecase
            .update(RecordId(id), TaskUpdate::description(description))
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Outcome<()>, ServerError> {
        self.usecase.delete(RecordId(id)).await
    }

    /// Sets the status from its textual form. An unknown status is reported
    /// without reading or writing the store.
    pub async fn mark(&self, id: u64, status: &str) -> Result<Outcome<()>, ServerError> {
        match status_or_reject(status) {
            Some(status) => self.mark_as(id, status).await,
            None => Ok(Outcome::InvalidStatus(status.to_string())),
        }
    }

    pub async fn mark_as(&self, id: u64, status: TaskStatus) -> Result<Outcome<()>, ServerError> {
        self.usecase.mark(RecordId(id), status).await
    }

    /// Tasks in store order, optionally only those with the given status.
    pub async fn list(&self, status: Option<&str>) -> Result<Outcome<Vec<Task>>, ServerError> {
        let filter = match status {
            Some(raw) => match status_or_reject(raw) {
                Some(status) => Some(status),
                None => return Ok(Outcome::InvalidStatus(raw.to_string())),
            },
            None => None,
        };
        self.usecase.list(filter).await
    }
}

// Input parsing shared with the command-line front-ends.
// ---

/// Parses a non-negative amount, allowing thousands separators.
pub fn parse_amount(s: &str) -> Result<f64, ServerError> {
    Ok(AmountModel::from_str(s)?.into())
}

/// Parses an ISO 4217 currency code (ex. USD, EUR, JPY).
pub fn parse_currency(s: &str) -> Result<Currency, ServerError> {
    Currency::from_code(&s.trim().to_uppercase()).ok_or_else(|| InvalidIsoCurrencyCode::new(s))
}

/// Parses a task status: `todo`, `in-progress` or `done`.
pub fn parse_status(s: &str) -> Result<TaskStatus, ServerError> {
    Ok(TaskStatusModel::from_str(s)?.into())
}

fn status_or_reject(s: &str) -> Option<TaskStatus> {
    match parse_status(s) {
        Ok(status) => Some(status),
        Err(e) => {
            tracing::debug!(error = ?e, "rejected status");
            None
        }
    }
}

fn checked_amount(amount: f64) -> Result<f64, ServerError> {
    AmountModel::try_from(amount)
        .map(Into::into)
        .map_err(|_| InvalidAmount::new(&amount.to_string()))
}
