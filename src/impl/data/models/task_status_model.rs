use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::{Deserialize, Serialize};

use crate::{entities::TaskStatus, errors::InvalidStatus};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TaskStatusModel(TaskStatus);
impl FromStr for TaskStatusModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .map(TaskStatusModel)
            .ok_or_else(|| InvalidStatus::new(s))
    }
}
impl<'de> Deserialize<'de> for TaskStatusModel {
    fn deserialize<D>(deserializer: D) -> Result<TaskStatusModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TaskStatusModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}
impl Serialize for TaskStatusModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl From<TaskStatus> for TaskStatusModel {
    fn from(status: TaskStatus) -> Self {
        TaskStatusModel(status)
    }
}

impl Into<TaskStatus> for TaskStatusModel {
    fn into(self) -> TaskStatus {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_status() {
        for status in TaskStatus::ALL {
            let model: TaskStatusModel = status.as_str().parse().unwrap();
            assert_eq!(Into::<TaskStatus>::into(model), status);
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_values() {
        assert!("bogus-status".parse::<TaskStatusModel>().is_err());
        assert!("Done".parse::<TaskStatusModel>().is_err());
        assert!("in_progress".parse::<TaskStatusModel>().is_err());
    }
}
