use async_trait::async_trait;
use chrono::Month;
use fractic_server_error::ServerError;

use crate::{
    config::StoreConfig,
    data::{
        models::expense_model::ExpenseModel,
        repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::{
        logic::record_store::RecordStore, repositories::records_repository::RecordsRepository,
    },
    entities::{Clock, Expense, ExpenseSummary, ExpenseUpdate, Outcome, RecordId, SystemClock},
};

#[async_trait]
pub trait ExpenseUsecase: Send + Sync {
    async fn add(&self, description: String, amount: f64) -> Result<RecordId, ServerError>;

    async fn update(
        &self,
        id: RecordId,
        update: ExpenseUpdate,
    ) -> Result<Outcome<()>, ServerError>;

    async fn delete(&self, id: RecordId) -> Result<Outcome<()>, ServerError>;

    async fn list(&self) -> Result<Outcome<Vec<Expense>>, ServerError>;

    async fn summary(&self, month: Option<Month>) -> Result<ExpenseSummary, ServerError>;
}

pub(crate) struct ExpenseUsecaseImpl<
    C = SystemClock,
    R1 = RecordsRepositoryImpl<Expense, ExpenseModel>, // Default.
> where
    C: Clock,
    R1: RecordsRepository<Expense>,
{
    store: RecordStore<Expense, R1>,
    clock: C,
}

#[async_trait]
impl<C, R1> ExpenseUsecase for ExpenseUsecaseImpl<C, R1>
where
    C: Clock,
    R1: RecordsRepository<Expense>,
{
    async fn add(&self, description: String, amount: f64) -> Result<RecordId, ServerError> {
        let date = self.clock.today();
        self.store
            .add(move |id| Expense {
                id,
                date,
                description,
                amount,
            })
            .await
    }

    async fn update(
        &self,
        id: RecordId,
        update: ExpenseUpdate,
    ) -> Result<Outcome<()>, ServerError> {
        self.store.update(id, move |e| e.apply(update)).await
    }

    async fn delete(&self, id: RecordId) -> Result<Outcome<()>, ServerError> {
        self.store.delete(id).await
    }

    async fn list(&self) -> Result<Outcome<Vec<Expense>>, ServerError> {
        self.store.list(|_| true).await
    }

    async fn summary(&self, month: Option<Month>) -> Result<ExpenseSummary, ServerError> {
        Ok(self.store.load().await?.summarize(month))
    }
}

impl<C: Clock> ExpenseUsecaseImpl<C> {
    pub(crate) fn new(config: StoreConfig, clock: C) -> Self {
        ExpenseUsecaseImpl {
            store: RecordStore::new(RecordsRepositoryImpl::new(config)),
            clock,
        }
    }
}

impl<C, R1> ExpenseUsecaseImpl<C, R1>
where
    C: Clock,
    R1: RecordsRepository<Expense>,
{
    #[cfg(test)]
    pub(crate) fn with_repository(repository: R1, clock: C) -> Self {
        ExpenseUsecaseImpl {
            store: RecordStore::new(repository),
            clock,
        }
    }
}
