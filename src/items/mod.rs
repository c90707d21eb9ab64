use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{auth::session::require_session, state::AppState};

mod dto;
mod handlers;

pub fn router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/item/new", post(handlers::create_item))
        .route("/api/item/:id", get(handlers::get_item))
        .route("/api/getMyDetail", get(handlers::list_my_items))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/api", get(handlers::list_items))
        .route("/api/", get(handlers::list_items))
        .merge(protected)
}
