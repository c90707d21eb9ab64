use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod cookie;
mod dto;
mod handlers;
pub mod password;
pub mod session;
pub mod token;

pub fn router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/logout", get(handlers::logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::require_session,
        ));

    Router::new()
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .merge(protected)
}
