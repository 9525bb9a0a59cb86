use std::sync::Arc;

use axum::{routing::post, Router};

use crate::{
    core::state::AppState,
    handlers::auth::{authenticate, register},
};

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/registration", post(register))
        .route("/authentication", post(authenticate))
}
