use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime};
use fractic_server_error::ServerError;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidTimestamp;

/// Local ISO-8601 timestamp without offset. `%.f` keeps whatever sub-second
/// precision the value carries, so timestamps survive a save/load cycle
/// unchanged.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Timestamp as stored in the task list.
///
/// Writes local time without an offset. Reads either that form or an RFC 3339
/// timestamp with an offset (e.g. `2024-05-01T07:30:00.000Z`), which is
/// converted to local time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimestampModel(NaiveDateTime);
impl FromStr for TimestampModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
            return Ok(TimestampModel(t));
        }
        let t = DateTime::parse_from_rfc3339(s)
            .map_err(|e| InvalidTimestamp::with_debug(s, &e))?
            .with_timezone(&Local)
            .naive_local();
        Ok(TimestampModel(t))
    }
}
impl<'de> Deserialize<'de> for TimestampModel {
    fn deserialize<D>(deserializer: D) -> Result<TimestampModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TimestampModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}
impl Serialize for TimestampModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.format(TIMESTAMP_FORMAT).to_string())
    }
}

impl From<NaiveDateTime> for TimestampModel {
    fn from(t: NaiveDateTime) -> Self {
        TimestampModel(t)
    }
}

impl Into<NaiveDateTime> for TimestampModel {
    fn into(self) -> NaiveDateTime {
        self.0
    }
}
