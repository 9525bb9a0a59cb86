use std::sync::Arc;

use axum::{
    routing::{post, put},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::performer::{change_status, create_comment},
};

pub fn performer_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/change_status/:id/:status", put(change_status))
        .route("/create_comment/task/:id", post(create_comment))
}
