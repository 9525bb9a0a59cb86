use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{core::state::AppState, utils::jwt::verify_jwt};

/// The caller a bearer token speaks for.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub email: String,
    pub roles: Vec<String>,
}

impl Principal {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Attaches the caller's principal when the request carries a valid token.
/// Never rejects: bad or missing tokens leave the request anonymous and the
/// capability checks downstream answer it.
pub async fn resolve_principal(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let already_resolved = request.extensions().get::<Principal>().is_some();

    if !already_resolved {
        if let Some(token) = bearer_token(&request) {
            match verify_jwt(token, &state.config.jwt_secret) {
                Ok(claims) => {
                    let principal = Principal {
                        email: claims.sub,
                        roles: claims.roles,
                    };
                    request.extensions_mut().insert(principal);
                }
                Err(e) => debug!("Ignoring bearer token: {}", e),
            }
        }
    }

    next.run(request).await
}
