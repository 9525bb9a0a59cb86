pub mod admin;
pub mod auth;
pub mod general;
pub mod performer;

use crate::{
    core::state::AppState,
    dto::user::UserDto,
    middlewares::auth::Principal,
    services::user::UserService,
    utils::response::APIError,
};

/// The stored user behind an authenticated principal.
pub(crate) async fn caller(state: &AppState, principal: &Principal) -> Result<UserDto, APIError> {
    let user = UserService::new(&state.database, state.config.bcrypt_cost)
        .get_by_email(&principal.email)
        .await?;

    Ok(user)
}
