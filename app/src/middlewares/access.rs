use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::auth::Principal;
use crate::{models::user::Role, utils::response::APIError};

/// What a handler group lets its callers do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Lookups and listings, any authenticated caller.
    Read,
    Administer,
    /// Performer-scoped writes, ownership is checked by the handlers.
    Perform,
}

impl Capability {
    pub fn allows(self, principal: &Principal) -> bool {
        match self {
            Capability::Read => true,
            Capability::Administer => principal.has_role(Role::Admin.as_str()),
            Capability::Perform => principal.has_role(Role::User.as_str()),
        }
    }
}

/// Route layer for a handler group; the capability is the middleware state.
pub async fn require_capability(
    State(capability): State<Capability>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(principal) = request.extensions().get::<Principal>() else {
        return APIError::UnAuthorized.into_response();
    };

    if !capability.allows(principal) {
        warn!(
            "{} denied {:?} on {}",
            principal.email,
            capability,
            request.uri().path()
        );
        return APIError::Forbidden("Access Denied".to_string()).into_response();
    }

    next.run(request).await
}
