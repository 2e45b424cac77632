use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use gatehouse_auth::{Claims, Principal, verify_token};
use gatehouse_core::AppError;
use tracing::debug;

use crate::state::AppState;

/// Extractor that validates the bearer JWT and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The subject of the token.
    pub fn user_id(&self) -> &str {
        &self.0.sub
    }

    pub fn principal(&self) -> Principal {
        Principal::from(self.0.clone())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// First stage of a protected route: authenticates the request and attaches
/// its [`Principal`] for the stages after it.
pub async fn authenticate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    debug!(principal = %auth_user.user_id(), "Authenticated request");
    parts.extensions.insert(auth_user.principal());

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_claims(sub: &str, is_admin: bool) -> Claims {
        Claims {
            sub: sub.to_string(),
            is_admin,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_user_id() {
        let auth_user = AuthUser(create_test_claims("u1", false));
        assert_eq!(auth_user.user_id(), "u1");
    }

    #[test]
    fn test_principal_carries_admin_flag() {
        let admin = AuthUser(create_test_claims("u1", true)).principal();
        assert_eq!(admin.id, "u1");
        assert!(admin.is_admin);

        let regular = AuthUser(create_test_claims("u2", false)).principal();
        assert!(!regular.is_admin);
    }
}
