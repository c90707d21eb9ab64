mod app;
mod auth;
mod config;
mod error;
mod extract;
mod items;
mod state;
mod store;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("config.env").ok();
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "lostfound=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let (app_state, db) = AppState::init().await?;
    tracing::info!(mode = ?app_state.config.session.mode, "configuration loaded");

    sqlx::migrate!("./migrations").run(&db).await?;

    let app = app::build_app(app_state)?;
    app::serve(app).await
}
