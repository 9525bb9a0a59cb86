use anyhow::Result;
use std::sync::Arc;

use axum::Router;

use crate::{
    config::config::Config,
    core::state::AppState,
    database::{
        connect::{connect_database, run_migrations},
        seed::seed_default_admin,
    },
    routes::create_routers,
};

/// Connects and migrates the store, seeds the configured admin, and builds the router.
pub async fn create_server(config: Config) -> Result<Router<()>> {
    let db_conn = connect_database(config.clone()).await?;
    run_migrations(&db_conn).await?;
    seed_default_admin(&db_conn, &config).await?;

    let state = AppState {
        database: db_conn,
        config,
    };

    Ok(create_routers(Arc::new(state)))
}
