use fractic_server_error::ServerError;

use crate::{
    domain::repositories::records_repository::RecordsRepository,
    entities::{Collection, Outcome, Record, RecordId},
    errors::IdSpaceExhausted,
};

/// Load / mutate / save engine shared by every record type.
///
/// Each method runs one complete command: the collection is loaded fresh from
/// the repository, a single operation is applied, and the result is persisted
/// only if something actually changed.
pub(crate) struct RecordStore<R, P>
where
    R: Record,
    P: RecordsRepository<R>,
{
    repository: P,
    _phantom: std::marker::PhantomData<R>,
}

impl<R, P> RecordStore<R, P>
where
    R: Record,
    P: RecordsRepository<R>,
{
    pub(crate) fn new(repository: P) -> Self {
        Self {
            repository,
            _phantom: std::marker::PhantomData,
        }
    }

    pub(crate) async fn load(&self) -> Result<Collection<R>, ServerError> {
        self.repository.load().await
    }

    pub(crate) async fn save(&self, collection: &Collection<R>) -> Result<(), ServerError> {
        self.repository.save(collection).await
    }

    pub(crate) async fn add<F>(&self, build: F) -> Result<RecordId, ServerError>
    where
        F: FnOnce(RecordId) -> R + Send,
    {
        let mut collection = self.load().await?;
        let id = collection
            .insert_with(build)
            .ok_or_else(|| IdSpaceExhausted::new(R::KIND))?;
        self.save(&collection).await?;
        tracing::info!(kind = R::KIND, id = id.0, "record added");
        Ok(id)
    }

    pub(crate) async fn update<F>(&self, id: RecordId, apply: F) -> Result<Outcome<()>, ServerError>
    where
        F: FnOnce(&mut R) + Send,
    {
        let mut collection = self.load().await?;
        if !collection.modify(id, apply) {
            tracing::warn!(kind = R::KIND, id = id.0, "update target not found");
            return Ok(Outcome::NotFound(id));
        }
        self.save(&collection).await?;
        tracing::info!(kind = R::KIND, id = id.0, "record updated");
        Ok(Outcome::Success(()))
    }

    pub(crate) async fn delete(&self, id: RecordId) -> Result<Outcome<()>, ServerError> {
        let mut collection = self.load().await?;
        if !collection.remove(id) {
            tracing::warn!(kind = R::KIND, id = id.0, "delete target not found");
            return Ok(Outcome::NotFound(id));
        }
        self.save(&collection).await?;
        tracing::info!(kind = R::KIND, id = id.0, "record deleted");
        Ok(Outcome::Success(()))
    }

    pub(crate) async fn list<F>(&self, predicate: F) -> Result<Outcome<Vec<R>>, ServerError>
    where
        F: Fn(&R) -> bool + Send,
    {
        let records = self.load().await?.matching(predicate);
        if records.is_empty() {
            return Ok(Outcome::NoRecords);
        }
        Ok(Outcome::Success(records))
    }
}
