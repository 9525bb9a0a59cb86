use chrono::Duration;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use super::{error::ServiceError, user::UserService};
use crate::{
    config::config::Config,
    dto::{
        auth::{AuthenticationRequest, JwtResponse},
        user::UserDto,
    },
    utils::{jwt::create_jwt, password::verify_password},
};

const BAD_CREDENTIALS: &str = "Bad credentials";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    fn users(&self) -> UserService<'a> {
        UserService::new(self.db, self.config.bcrypt_cost)
    }

    fn issue_token(&self, email: String, role: String) -> Result<JwtResponse, ServiceError> {
        let token = create_jwt(
            email,
            vec![role],
            &self.config.jwt_secret,
            Duration::minutes(self.config.jwt_lifetime_minutes),
        )?;

        Ok(JwtResponse { token })
    }

    /// Stores the user and hands back a token for the new identity.
    pub async fn register(&self, user: UserDto) -> Result<JwtResponse, ServiceError> {
        let created = self.users().create(user).await?;
        info!("register(): {} as {}", created.email, created.role);

        self.issue_token(created.email, created.role)
    }

    /// Unknown emails and wrong secrets fail the same way.
    pub async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<JwtResponse, ServiceError> {
        let credentials = match self.users().load_credentials(&request.email).await {
            Ok(credentials) => credentials,
            Err(ServiceError::NotFound(_)) => {
                warn!("authenticate(): unknown email {}", request.email);
                return Err(ServiceError::Authentication(BAD_CREDENTIALS.to_string()));
            }
            Err(err) => return Err(err),
        };

        if !verify_password(&request.password, &credentials.password_hash) {
            warn!("authenticate(): wrong password for {}", request.email);
            return Err(ServiceError::Authentication(BAD_CREDENTIALS.to_string()));
        }
        info!("authenticate(): {}", credentials.email);

        self.issue_token(credentials.email, credentials.role.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use crate::{
        test_utils::{new_user, test_config, test_database},
        utils::jwt::verify_jwt,
    };

    fn login(email: &str, password: &str) -> AuthenticationRequest {
        AuthenticationRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_issues_token_with_role() {
        let db = test_database().await;
        let config = test_config();
        let service = AuthService::new(&db, &config);

        let response = service.register(new_user("user1@mail.ru", "USER")).await.unwrap();
        let claims = verify_jwt(&response.token, &config.jwt_secret).unwrap();

        assert_eq!(claims.sub, "user1@mail.ru");
        assert_eq!(claims.roles, ["USER"]);
        assert_eq!(claims.exp - claims.iat, config.jwt_lifetime_minutes * 60);
    }

    #[rstest]
    #[case("ROOT")]
    #[case("user")]
    #[case("Admin")]
    #[tokio::test]
    async fn test_register_rejects_unknown_role(#[case] role: &str) {
        let db = test_database().await;
        let config = test_config();
        let service = AuthService::new(&db, &config);

        let err = service.register(new_user("user1@mail.ru", role)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(msg) if msg == "Role must be either USER or ADMIN"));
        assert!(UserService::new(&db, config.bcrypt_cost).list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_authenticate_after_register() {
        let db = test_database().await;
        let config = test_config();
        let service = AuthService::new(&db, &config);
        service.register(new_user("admin@mail.ru", "ADMIN")).await.unwrap();

        let response = service.authenticate(login("admin@mail.ru", "password")).await.unwrap();
        let claims = verify_jwt(&response.token, &config.jwt_secret).unwrap();

        assert_eq!(claims.roles, ["ADMIN"]);
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let db = test_database().await;
        let config = test_config();
        let service = AuthService::new(&db, &config);
        service.register(new_user("user1@mail.ru", "USER")).await.unwrap();

        let wrong_password = service.authenticate(login("user1@mail.ru", "nope!")).await.unwrap_err();
        let unknown = service.authenticate(login("ghost@mail.ru", "password")).await.unwrap_err();

        for err in [wrong_password, unknown] {
            assert!(matches!(err, ServiceError::Authentication(msg) if msg == "Bad credentials"));
        }
    }
}
