use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::{error, warn};
use uuid::Uuid;

use super::cookie::SESSION_COOKIE;
use crate::{error::ApiError, state::AppState, store::User};

/// The acting user attached to a request by [`require_session`].
#[derive(Debug, Clone)]
pub enum Session {
    Active(User),
    /// The token verified but its account has since been removed.
    Orphaned(Uuid),
}

impl Session {
    pub fn user_id(&self) -> Uuid {
        match self {
            Session::Active(user) => user.id,
            Session::Orphaned(id) => *id,
        }
    }

    pub fn user(&self) -> Result<&User, ApiError> {
        match self {
            Session::Active(user) => Ok(user),
            Session::Orphaned(id) => {
                warn!(user_id = %id, "session refers to a missing account");
                Err(ApiError::OrphanedSession)
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(ApiError::Unauthenticated)
    }
}

/// Cookie -> token -> account. Rejects with 401 when the cookie is missing or
/// the token does not verify.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value())
        .filter(|v| !v.trim().is_empty())
        .ok_or(ApiError::Unauthenticated)?;

    let user_id = state.tokens.verify(token).map_err(|e| {
        warn!(error = %e, "rejected session token");
        ApiError::InvalidToken
    })?;

    let session = match state.users.find_by_id(user_id).await {
        Ok(Some(user)) => Session::Active(user),
        Ok(None) => Session::Orphaned(user_id),
        Err(e) => {
            error!(error = %e, %user_id, "session user lookup failed");
            return Err(ApiError::InvalidToken);
        }
    };

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
