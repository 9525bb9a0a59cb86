pub mod auth;
pub mod comment;
pub mod error;
pub mod task;
pub mod user;

use sea_orm::{AccessMode, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// Transaction for multi-query reads, flagged read-only so the store can optimise it.
pub(crate) async fn begin_read_only(
    db: &DatabaseConnection,
) -> Result<DatabaseTransaction, DbErr> {
    db.begin_with_config(None, Some(AccessMode::ReadOnly)).await
}
