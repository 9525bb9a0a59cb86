use sea_orm::DatabaseConnection;

use crate::{
    config::config::Config,
    database::connect::{connect_database, run_migrations},
    dto::{task::TaskDto, user::UserDto},
};

pub const TEST_BCRYPT_COST: u32 = 4;

/// In-memory SQLite with a single connection, so every query sees the same database.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        port: 8000,
        server_ip: "127.0.0.1".to_string(),
        max_connections: 1,
        min_connections: 1,
        jwt_secret: "test-secret-key".to_string(),
        jwt_lifetime_minutes: 60,
        bcrypt_cost: TEST_BCRYPT_COST,
        admin_email: None,
        admin_password: None,
    }
}

pub async fn test_database() -> DatabaseConnection {
    let db = connect_database(test_config()).await.unwrap();
    run_migrations(&db).await.unwrap();
    db
}

pub fn new_user(email: &str, role: &str) -> UserDto {
    UserDto {
        email: email.to_string(),
        password: "password".to_string(),
        role: role.to_string(),
        ..Default::default()
    }
}

pub fn new_task(title: &str) -> TaskDto {
    TaskDto {
        title: title.to_string(),
        description: "Description".to_string(),
        status: "PENDING".to_string(),
        priority: "LOW".to_string(),
        ..Default::default()
    }
}
