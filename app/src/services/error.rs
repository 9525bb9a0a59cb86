use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

use crate::utils::{response::APIError, validation::ValidationErrors};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl ServiceError {
    pub fn task_not_found(task_id: i32) -> Self {
        Self::NotFound(format!("Task wasn't found with id {}", task_id))
    }

    pub fn comment_not_found(comment_id: i32) -> Self {
        Self::NotFound(format!("Comment wasn't found with id {}", comment_id))
    }

    pub fn user_not_found(user_id: i32) -> Self {
        Self::NotFound(format!("User wasn't found with id {}", user_id))
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::Validation(format!("Unique constraint violated: {}", detail))
            }
            _ => match err {
                DbErr::RecordNotFound(msg) => Self::NotFound(msg),
                other => Self::Database(other),
            },
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<ServiceError> for APIError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => APIError::NotFound(msg),
            ServiceError::Validation(msg) | ServiceError::Authentication(msg) => {
                APIError::BadRequest(msg)
            }
            other => {
                error!("Request failed: {}", other);
                APIError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}
