use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::StoreConfig,
    data::datasources::json_file_datasource::{JsonFileDatasource, JsonFileDatasourceImpl},
    domain::repositories::records_repository::RecordsRepository,
    entities::{Collection, Record},
};

pub(crate) struct RecordsRepositoryImpl<R, M, DS = JsonFileDatasourceImpl<M>>
where
    R: Record,
    M: From<R> + Into<R> + Serialize + DeserializeOwned + Send + Sync,
    DS: JsonFileDatasource<M>,
{
    datasource: DS,
    _phantom: std::marker::PhantomData<fn() -> (R, M)>,
}

#[async_trait]
impl<R, M, DS> RecordsRepository<R> for RecordsRepositoryImpl<R, M, DS>
where
    R: Record,
    M: From<R> + Into<R> + Serialize + DeserializeOwned + Send + Sync,
    DS: JsonFileDatasource<M>,
{
    async fn load(&self) -> Result<Collection<R>, ServerError> {
        let models = self.datasource.read().await?;
        Ok(models
            .into_iter()
            .map(Into::into)
            .collect::<Vec<R>>()
            .into())
    }

    async fn save(&self, collection: &Collection<R>) -> Result<(), ServerError> {
        let models: Vec<M> = collection.records().iter().cloned().map(M::from).collect();
        self.datasource.write(&models).await
    }
}

impl<R, M> RecordsRepositoryImpl<R, M, JsonFileDatasourceImpl<M>>
where
    R: Record,
    M: From<R> + Into<R> + Serialize + DeserializeOwned + Send + Sync,
{
    pub(crate) fn new(config: StoreConfig) -> Self {
        RecordsRepositoryImpl {
            datasource: JsonFileDatasourceImpl::new(config, R::KIND),
            _phantom: std::marker::PhantomData,
        }
    }
}
