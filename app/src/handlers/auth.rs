use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::{
    core::state::AppState,
    dto::{
        auth::{AuthenticationRequest, JwtResponse},
        user::UserDto,
    },
    services::auth::AuthService,
    utils::{response::APIError, validation::ValidatedJson},
};

pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(user): ValidatedJson<UserDto>,
) -> Result<Json<JwtResponse>, APIError> {
    info!("User registration request: {}", user.email);
    let response = AuthService::new(&state.database, &state.config)
        .register(user)
        .await?;

    Ok(Json(response))
}

pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<AuthenticationRequest>,
) -> Result<Json<JwtResponse>, APIError> {
    info!("User authentication request: {}", request.email);
    let response = AuthService::new(&state.database, &state.config)
        .authenticate(request)
        .await?;

    Ok(Json(response))
}
