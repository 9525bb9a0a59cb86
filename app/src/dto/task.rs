use serde::{Deserialize, Serialize};

use super::comment::CommentDto;
use crate::utils::validation::{Validate, ValidationErrors};

pub const TASK_STATUSES: [&str; 3] = ["PENDING", "IN PROGRESS", "COMPLETED"];
pub const TASK_PRIORITIES: [&str; 3] = ["HIGH", "MEDIUM", "LOW"];

/// Canonical (upper-case) form of a known status, if it is one.
pub fn parse_status(value: &str) -> Option<&'static str> {
    let value = value.to_uppercase();
    TASK_STATUSES.iter().copied().find(|status| *status == value)
}

pub fn parse_priority(value: &str) -> Option<&'static str> {
    let value = value.to_uppercase();
    TASK_PRIORITIES.iter().copied().find(|priority| *priority == value)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskDto {
    pub task_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub author_id: Option<i32>,
    #[serde(rename = "taskPerformerId")]
    pub performer_id: Option<i32>,
    #[serde(skip_deserializing)]
    pub comment_list: Vec<CommentDto>,
}

impl TaskDto {
    /// Known status and priority values in their upper-case form.
    pub fn canonical(mut self) -> Self {
        if let Some(status) = parse_status(&self.status) {
            self.status = status.to_string();
        }
        if let Some(priority) = parse_priority(&self.priority) {
            self.priority = priority.to_string();
        }
        self
    }
}

impl Validate for TaskDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if errors.not_blank(&self.title, "Title may not be empty") {
            errors.length(&self.title, 2, 50, "Title size must be between 2 and 50");
        }
        if errors.not_blank(&self.description, "Description may not be empty") {
            errors.length(
                &self.description,
                2,
                5000,
                "Description size must be between 2 and 5000",
            );
        }
        if errors.not_blank(&self.status, "Status may not be empty") && parse_status(&self.status).is_none() {
            errors.push("Status must be one of PENDING, IN PROGRESS, COMPLETED");
        }
        if errors.not_blank(&self.priority, "Priority may not be empty")
            && parse_priority(&self.priority).is_none()
        {
            errors.push("Priority must be one of HIGH, MEDIUM, LOW");
        }

        errors.into_result()
    }
}
