use std::fmt;

use chrono::NaiveDateTime;

use super::record::{Record, RecordId};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: RecordId,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Field overwrites for an existing task. `None` keeps the stored value;
/// `updated_at` is refreshed regardless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

// --

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Record for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl TaskUpdate {
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            status: None,
        }
    }

    pub fn status(status: TaskStatus) -> Self {
        Self {
            description: None,
            status: Some(status),
        }
    }
}
