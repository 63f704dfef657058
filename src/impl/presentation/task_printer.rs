use crate::entities::{RecordId, Task, TaskStatus};

use super::utils::truncate;

const TIMESTAMP_COLUMN_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub struct TaskPrinter;

impl TaskPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_list(&self, tasks: &[Task]) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<5} {:<12} {:<40} {:<20} {:<20}\n",
            "ID", "Status", "Description", "Created", "Updated"
        ));
        output.push_str(&"-".repeat(95));
        output.push('\n');
        for t in tasks {
            output.push_str(&format!(
                "{:<5} {:<12} {:<40} {:<20} {:<20}\n",
                t.id.to_string(),
                t.status.as_str(),
                truncate(&t.description, 35),
                t.created_at.format(TIMESTAMP_COLUMN_FORMAT).to_string(),
                t.updated_at.format(TIMESTAMP_COLUMN_FORMAT).to_string(),
            ));
        }
        output
    }

    pub fn print_added(&self, id: RecordId) -> String {
        format!("Task added successfully (ID: {})", id)
    }

    pub fn print_updated(&self, id: RecordId) -> String {
        format!("Task {} updated successfully", id)
    }

    pub fn print_deleted(&self, id: RecordId) -> String {
        format!("Task {} deleted successfully", id)
    }

    pub fn print_marked(&self, id: RecordId, status: TaskStatus) -> String {
        format!("Task {} marked as {}", id, status)
    }

    pub fn print_not_found(&self, id: RecordId) -> String {
        format!("Error: Task with ID {} not found", id)
    }

    pub fn print_no_records(&self) -> String {
        "No tasks found".to_string()
    }

    pub fn print_invalid_status(&self, raw: &str) -> String {
        let valid: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
        format!("Error: Invalid status '{}'. Use {}", raw, valid.join(", "))
    }
}

impl Default for TaskPrinter {
    fn default() -> Self {
        Self::new()
    }
}
