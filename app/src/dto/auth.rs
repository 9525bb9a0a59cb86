use serde::{Deserialize, Serialize};

use super::user::validate_credentials;
use crate::utils::validation::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthenticationRequest {
    pub email: String,
    pub password: String,
}

impl Validate for AuthenticationRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_credentials(&mut errors, &self.email, &self.password);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtResponse {
    pub token: String,
}
