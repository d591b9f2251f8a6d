use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::Config;
use crate::contact::RelayClient;
use crate::error::AppError;

mod assets;
mod contact;
mod health;
mod index;
mod portfolio;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: RelayClient,
}

async fn fallback() -> AppError {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/portfolio", get(portfolio::grid))
        .route("/contact", post(contact::action))
        .nest_service("/static", AssetsService::default())
        .fallback(fallback)
        .with_state(app_state)
        .layer(axum_middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        .layer(axum_middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
