pub mod admin;
pub mod auth;
pub mod general;
pub mod performer;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    core::state::AppState,
    handlers::general::welcome,
    middlewares::{
        access::{require_capability, Capability},
        auth::resolve_principal,
    },
    routes::{
        admin::admin_routes, auth::auth_routes, general::general_routes,
        performer::performer_routes,
    },
    utils::global_error_handler::global_error_handler,
};

pub fn create_routers(state: Arc<AppState>) -> Router<()> {
    let general = general_routes().route_layer(middleware::from_fn_with_state(
        Capability::Read,
        require_capability,
    ));
    let admin = admin_routes().route_layer(middleware::from_fn_with_state(
        Capability::Administer,
        require_capability,
    ));
    let performer = performer_routes().route_layer(middleware::from_fn_with_state(
        Capability::Perform,
        require_capability,
    ));

    let api_routes = general.merge(admin).nest("/performer", performer);
    let welcome_route = get(welcome).route_layer(middleware::from_fn_with_state(
        Capability::Read,
        require_capability,
    ));

    Router::new()
        .nest("/start", auth_routes())
        .route("/api", welcome_route.clone())
        .route("/api/", welcome_route)
        .nest("/api", api_routes)
        .fallback(global_error_handler)
        .layer(middleware::from_fn_with_state(state.clone(), resolve_principal))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
