use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorItem {
    pub message: String,
    pub timestamp: String,
}

impl ErrorItem {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Debug)]
pub enum APIError {
    BadRequest(String),
    UnAuthorized,
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
}

impl APIError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnAuthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::InternalServerError(msg) => msg,
            Self::UnAuthorized => "Full authentication is required to access this resource".to_string(),
        };

        (status, Json(ErrorItem::new(message))).into_response()
    }
}
