use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::StoreConfig,
    data::{
        models::task_model::TaskModel, repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::{
        logic::record_store::RecordStore, repositories::records_repository::RecordsRepository,
    },
    entities::{Clock, Outcome, RecordId, SystemClock, Task, TaskStatus, TaskUpdate},
};

#[async_trait]
pub trait TaskUsecase: Send + Sync {
    async fn add(&self, description: String) -> Result<RecordId, ServerError>;

    async fn update(&self, id: RecordId, update: TaskUpdate) -> Result<Outcome<()>, ServerError>;

    async fn delete(&self, id: RecordId) -> Result<Outcome<()>, ServerError>;

    async fn mark(&self, id: RecordId, status: TaskStatus) -> Result<Outcome<()>, ServerError>;

    async fn list(&self, status: Option<TaskStatus>) -> Result<Outcome<Vec<Task>>, ServerError>;
}

pub(crate) struct TaskUsecaseImpl<
    C = SystemClock,
    R1 = RecordsRepositoryImpl<Task, TaskModel>, // Default.
> where
    C: Clock,
    R1: RecordsRepository<Task>,
{
    store: RecordStore<Task, R1>,
    clock: C,
}

#[async_trait]
impl<C, R1> TaskUsecase for TaskUsecaseImpl<C, R1>
where
    C: Clock,
    R1: RecordsRepository<Task>,
{
    async fn add(&self, description: String) -> Result<RecordId, ServerError> {
        let now = self.clock.now();
        self.store
            .add(move |id| Task::new(id, description, now))
            .await
    }

    async fn update(&self, id: RecordId, update: TaskUpdate) -> Result<Outcome<()>, ServerError> {
        let now = self.clock.now();
        self.store.update(id, move |t| t.apply(update, now)).await
    }

    async fn delete(&self, id: RecordId) -> Result<Outcome<()>, ServerError> {
        self.store.delete(id).await
    }

    async fn mark(&self, id: RecordId, status: TaskStatus) -> Result<Outcome<()>, ServerError> {
        self.update(id, TaskUpdate::status(status)).await
    }

    async fn list(&self, status: Option<TaskStatus>) -> Result<Outcome<Vec<Task>>, ServerError> {
        self.store
            .list(move |t| status.map_or(true, |s| t.status == s))
            .await
    }
}

impl<C: Clock> TaskUsecaseImpl<C> {
    pub(crate) fn new(config: StoreConfig, clock: C) -> Self {
        TaskUsecaseImpl {
            store: RecordStore::new(RecordsRepositoryImpl::new(config)),
            clock,
        }
    }
}

impl<C, R1> TaskUsecaseImpl<C, R1>
where
    C: Clock,
    R1: RecordsRepository<Task>,
{
    #[cfg(test)]
    pub(crate) fn with_repository(repository: R1, clock: C) -> Self {
        TaskUsecaseImpl {
            store: RecordStore::new(repository),
            clock,
        }
    }
}
