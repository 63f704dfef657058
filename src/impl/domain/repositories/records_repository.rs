use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{Collection, Record};

#[async_trait]
pub trait RecordsRepository<R: Record>: Send + Sync {
    async fn load(&self) -> Result<Collection<R>, ServerError>;

    async fn save(&self, collection: &Collection<R>) -> Result<(), ServerError>;
}
