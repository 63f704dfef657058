use chrono::NaiveDateTime;

use crate::entities::{RecordId, Task, TaskStatus, TaskUpdate};

impl Task {
    pub(crate) fn new(id: RecordId, description: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            description,
            status: TaskStatus::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn apply(&mut self, update: TaskUpdate, now: NaiveDateTime) {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::entities::{RecordId, Task, TaskStatus, TaskUpdate};

    fn at(hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_task_starts_as_todo() {
        let task = Task::new(RecordId(1), "Write report".into(), at(9));
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn apply_refreshes_updated_at_only() {
        let mut task = Task::new(RecordId(1), "Write report".into(), at(9));
        task.apply(TaskUpdate::status(TaskStatus::Done), at(11));
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.description, "Write report");
        assert_eq!(task.created_at, at(9));
        assert_eq!(task.updated_at, at(11));
    }
}
