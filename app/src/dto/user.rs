use serde::{Deserialize, Serialize};

use crate::{
    models::user::Role,
    utils::validation::{Validate, ValidationErrors},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: Option<i32>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}

pub(crate) fn validate_credentials(errors: &mut ValidationErrors, email: &str, password: &str) {
    if errors.not_blank(email, "Email address may not be empty") {
        errors.email(email, "Please provide a valid email address");
    }
    if errors.not_blank(password, "Password may not be empty") {
        errors.length(password, 5, 255, "Password size must be between 5 and 255");
    }
}

impl Validate for UserDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_credentials(&mut errors, &self.email, &self.password);
        if let Err(message) = self.role.parse::<Role>() {
            errors.push(message);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_passes() {
        let user = UserDto {
            email: "user1@mail.ru".to_string(),
            password: "user1".to_string(),
            role: "USER".to_string(),
            ..Default::default()
        };

        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_bad_fields_are_reported_together() {
        let user = UserDto {
            email: "user1-mail.ru".to_string(),
            password: "123".to_string(),
            role: "ROOT".to_string(),
            ..Default::default()
        };

        assert_eq!(
            user.validate().unwrap_err().messages(),
            [
                "Please provide a valid email address",
                "Password size must be between 5 and 255",
                "Role must be either USER or ADMIN",
            ]
        );
    }

    #[test]
    fn test_password_never_serialized() {
        let user = UserDto {
            user_id: Some(1),
            email: "user1@mail.ru".to_string(),
            password: "$2b$04$hash".to_string(),
            role: "USER".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["userId"], 1);
    }
}
