use serde::{Deserialize, Serialize};

use crate::utils::validation::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentDto {
    pub comment_id: Option<i32>,
    pub text: String,
    #[serde(skip_deserializing)]
    pub task_id: Option<i32>,
    #[serde(skip_deserializing)]
    pub user_id: Option<i32>,
}

impl Validate for CommentDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.not_blank(&self.text, "Comment may not be empty");
        errors.into_result()
    }
}
