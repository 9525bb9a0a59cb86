use std::{fmt, sync::LazyLock};

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::utils::response::APIError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+@\w+\.\w+$").expect("email pattern compiles"));

/// Every failed field check of one input object, in declaration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn not_blank(&mut self, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.push(message);
            return false;
        }
        true
    }

    pub fn length(&mut self, value: &str, min: usize, max: usize, message: &str) {
        let length = value.chars().count();
        if length < min || length > max {
            self.push(message);
        }
    }

    pub fn email(&mut self, value: &str, message: &str) {
        if !EMAIL_PATTERN.is_match(value) {
            self.push(message);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// JSON body that has passed its field checks before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = APIError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| APIError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| APIError::BadRequest(errors.to_string()))?;

        Ok(Self(value))
    }
}
