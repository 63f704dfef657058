use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::{MalformedPolicy, StoreConfig},
    errors::{MalformedStore, ReadError, SerializeError, WriteError},
};

#[async_trait]
pub(crate) trait JsonFileDatasource<M>: Send + Sync
where
    M: Serialize + DeserializeOwned + Send + Sync,
{
    /// Parses a whole store document. Applies the configured malformed-data
    /// policy instead of failing outright.
    fn from_string(&self, s: &str) -> Result<Vec<M>, ServerError>;

    fn to_string(&self, models: &[M]) -> Result<String, ServerError>;

    /// Reads the store document. A missing file is an empty store.
    async fn read(&self) -> Result<Vec<M>, ServerError>;

    /// Replaces the store document with `models`. The content is written to a
    /// sibling temp file first and renamed into place.
    async fn write(&self, models: &[M]) -> Result<(), ServerError>;
}

pub(crate) struct JsonFileDatasourceImpl<M> {
    config: StoreConfig,
    record_type: &'static str,
    _phantom: std::marker::PhantomData<fn() -> M>,
}

impl<M> JsonFileDatasourceImpl<M> {
    pub(crate) fn new(config: StoreConfig, record_type: &'static str) -> Self {
        Self {
            config,
            record_type,
            _phantom: std::marker::PhantomData,
        }
    }

    fn path_str(&self) -> String {
        self.config.path().to_string_lossy().to_string()
    }

    fn malformed(&self, details: &dyn std::fmt::Debug) -> Result<Vec<M>, ServerError> {
        match self.config.malformed_policy {
            MalformedPolicy::Discard => {
                tracing::warn!(
                    path = %self.config.path().display(),
                    record_type = self.record_type,
                    details = ?details,
                    "store document is malformed, starting from an empty list"
                );
                Ok(Vec::new())
            }
            MalformedPolicy::Fail => Err(MalformedStore::with_debug(
                &self.path_str(),
                self.record_type,
                &details,
            )),
        }
    }
}

#[async_trait]
impl<M> JsonFileDatasource<M> for JsonFileDatasourceImpl<M>
where
    M: Serialize + DeserializeOwned + Send + Sync,
{
    fn from_string(&self, s: &str) -> Result<Vec<M>, ServerError> {
        match serde_json::from_str::<Vec<M>>(s) {
            Ok(models) => Ok(models),
            Err(e) => self.malformed(&e),
        }
    }

    fn to_string(&self, models: &[M]) -> Result<String, ServerError> {
        let indent = vec![b' '; self.config.indent];
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        models
            .serialize(&mut serializer)
            .map_err(|e| SerializeError::with_debug(self.record_type, &e))?;
        String::from_utf8(buf).map_err(|e| SerializeError::with_debug(self.record_type, &e))
    }

    async fn read(&self) -> Result<Vec<M>, ServerError> {
        let path = self.config.path();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no store document yet");
                return Ok(Vec::new());
            }
            // Not valid UTF-8, so certainly not a JSON list.
            Err(e) if e.kind() == ErrorKind::InvalidData => return self.malformed(&e),
            Err(e) => return Err(ReadError::with_debug(&self.path_str(), &e)),
        };
        let models = self.from_string(&raw)?;
        tracing::debug!(path = %path.display(), count = models.len(), "store loaded");
        Ok(models)
    }

    async fn write(&self, models: &[M]) -> Result<(), ServerError> {
        let path = self.config.path();
        let content = self.to_string(models)?;
        let tmp = temp_path(path);
        let replaced = match tokio::fs::write(&tmp, content).await {
            Ok(()) => tokio::fs::rename(&tmp, path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = replaced {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    tracing::warn!(
                        path = %tmp.display(),
                        error = ?cleanup,
                        "could not remove temp file"
                    );
                }
            }
            return Err(WriteError::with_debug(&self.path_str(), &e));
        }
        tracing::debug!(path = %path.display(), count = models.len(), "store saved");
        Ok(())
    }
}

/// `dir/.name.tmp` next to the store document, so the final rename stays on
/// one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "store".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn datasource(policy: MalformedPolicy) -> JsonFileDatasourceImpl<Value> {
        JsonFileDatasourceImpl::new(
            StoreConfig::new("unused.json").with_malformed_policy(policy),
            "test",
        )
    }

    #[test]
    fn discards_malformed_documents_by_default() {
        let ds = datasource(MalformedPolicy::Discard);
        assert_eq!(ds.from_string("{not json").unwrap(), Vec::<Value>::new());
        assert_eq!(ds.from_string("").unwrap(), Vec::<Value>::new());
        assert_eq!(ds.from_string("{\"id\": 1}").unwrap(), Vec::<Value>::new());
    }

    #[test]
    fn fails_on_malformed_documents_when_strict() {
        let ds = datasource(MalformedPolicy::Fail);
        assert!(ds.from_string("{not json").is_err());
        assert_eq!(ds.from_string("[]").unwrap(), Vec::<Value>::new());
    }

    #[test]
    fn writes_with_configured_indent() {
        let ds = JsonFileDatasourceImpl::<Value>::new(
            StoreConfig::new("x.json").with_indent(2),
            "test",
        );
        let s = ds.to_string(&[json!({"id": 1})]).unwrap();
        assert_eq!(s, "[\n  {\n    \"id\": 1\n  }\n]");
    }

    #[tokio::test]
    async fn failed_write_leaves_no_temp_file() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory in place of the document makes the final rename fail.
        let store = dir.path().join("tasks.json");
        std::fs::create_dir(&store).unwrap();
        let ds = JsonFileDatasourceImpl::<Value>::new(StoreConfig::new(store.clone()), "test");

        assert!(ds.write(&[json!({"id": 1})]).await.is_err());
        assert!(!temp_path(&store).exists());
        assert!(store.is_dir());
    }

    #[tokio::test]
    async fn write_then_read_keeps_the_models() {
        let dir = tempfile::TempDir::new().unwrap();
        let ds = JsonFileDatasourceImpl::<Value>::new(
            StoreConfig::new(dir.path().join("tasks.json")),
            "test",
        );
        let models = vec![json!({"id": 1}), json!({"id": 2})];
        ds.write(&models).await.unwrap();
        assert_eq!(ds.read().await.unwrap(), models);
        assert!(!temp_path(&dir.path().join("tasks.json")).exists());
    }

    #[test]
    fn temp_file_sits_next_to_the_document() {
        assert_eq!(
            temp_path(Path::new("/data/tasks.json")),
            PathBuf::from("/data/.tasks.json.tmp")
        );
    }
}
