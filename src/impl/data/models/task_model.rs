use crate::entities::{RecordId, Task};

use super::{task_status_model::TaskStatusModel, timestamp_model::TimestampModel};

#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskModel {
    id: u64,
    description: String,
    status: TaskStatusModel,
    created_at: TimestampModel,
    updated_at: TimestampModel,
}

impl From<Task> for TaskModel {
    fn from(t: Task) -> Self {
        TaskModel {
            id: t.id.0,
            description: t.description,
            status: t.status.into(),
            created_at: t.created_at.into(),
            updated_at: t.updated_at.into(),
        }
    }
}

impl Into<Task> for TaskModel {
    fn into(self) -> Task {
        Task {
            id: RecordId(self.id),
            description: self.description,
            status: self.status.into(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
