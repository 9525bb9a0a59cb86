use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    config::config::Config,
    dto::user::UserDto,
    models::user::Role,
    services::{error::ServiceError, user::UserService},
};

/// Creates the configured administrator unless that email is already taken.
pub async fn seed_default_admin(db: &DatabaseConnection, config: &Config) -> Result<(), ServiceError> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        info!("No default admin configured");
        return Ok(());
    };

    let users = UserService::new(db, config.bcrypt_cost);
    match users.get_by_email(email).await {
        Ok(_) => {
            info!("Default admin already exists");
            return Ok(());
        }
        Err(ServiceError::NotFound(_)) => {}
        Err(e) => return Err(e),
    }

    users
        .create(UserDto {
            email: email.clone(),
            password: password.clone(),
            role: Role::Admin.to_string(),
            ..Default::default()
        })
        .await?;
    info!("Created default admin: {}", email);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_config, test_database};

    #[tokio::test]
    async fn test_seeds_admin_once() {
        let db = test_database().await;
        let mut config = test_config();
        config.admin_email = Some("admin@mail.ru".to_string());
        config.admin_password = Some("admin".to_string());

        seed_default_admin(&db, &config).await.unwrap();
        seed_default_admin(&db, &config).await.unwrap();

        let users = UserService::new(&db, config.bcrypt_cost).list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, "ADMIN");
    }

    #[tokio::test]
    async fn test_skipped_without_credentials() {
        let db = test_database().await;
        let config = test_config();

        seed_default_admin(&db, &config).await.unwrap();

        assert!(UserService::new(&db, config.bcrypt_cost).list_all().await.unwrap().is_empty());
    }
}
