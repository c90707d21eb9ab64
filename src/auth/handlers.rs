use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    cookie::{expired_cookie, session_cookie},
    dto::{LoginRequest, MessageResponse, RegisterRequest},
    password::{hash_password, verify_password},
    session::Session,
};
use crate::{
    error::{ApiError, ApiResult},
    extract::{required, ApiJson},
    state::AppState,
    store::NewUser,
};

type SessionResponse = (StatusCode, CookieJar, Json<MessageResponse>);

fn start_session(state: &AppState, jar: CookieJar, user_id: Uuid) -> ApiResult<CookieJar> {
    let token = state.tokens.issue(user_id).map_err(ApiError::Internal)?;
    Ok(jar.add(session_cookie(token, &state.config.session)))
}

#[instrument(skip(state, jar, payload))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> ApiResult<SessionResponse> {
    let email = required(payload.email, "email")?;
    let password = required(payload.password, "password")?;

    // Fast path only; the unique index decides under concurrent registrations.
    if state.users.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(ApiError::DuplicateEmail);
    }

    let hash = hash_password(&password).map_err(ApiError::Internal)?;
    let user = state
        .users
        .create(NewUser {
            name: payload.name.as_deref(),
            email: &email,
            password_hash: &hash,
        })
        .await
        .map_err(|e| {
            warn!(error = %e, email = %email, "create user rejected");
            ApiError::from(e)
        })?;

    let jar = start_session(&state, jar, user.id)?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        jar,
        Json(MessageResponse::ok("Registered Successfully")),
    ))
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<SessionResponse> {
    let email = required(payload.email, "email")?;
    let password = required(payload.password, "password")?;

    let Some(user) = state.users.find_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(ApiError::UnknownEmail);
    };

    if !verify_password(&password, &user.password_hash).map_err(ApiError::Internal)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::IncorrectPassword);
    }

    let jar = start_session(&state, jar, user.id)?;
    info!(user_id = %user.id, "user logged in");
    let message = format!("Welcome Back:{}", user.name.as_deref().unwrap_or_default());
    Ok((StatusCode::OK, jar, Json(MessageResponse::ok(message))))
}

#[instrument(skip(state, jar, session))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    session: Session,
) -> SessionResponse {
    info!(user_id = %session.user_id(), "user logged out");
    (
        StatusCode::OK,
        jar.add(expired_cookie(&state.config.session)),
        Json(MessageResponse::ok("Logout Successfully")),
    )
}
