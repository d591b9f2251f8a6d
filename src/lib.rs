pub mod config;
pub mod contact;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod site;
pub mod template;

pub use routes::AppState;

use contact::RelayClient;

/// Create the app router
///
/// Builds the Axum router with all routes configured; integration tests use
/// this with a mock relay client instead of starting the full server.
pub fn create_app(config: config::Config, relay: RelayClient) -> axum::Router {
    routes::router(AppState { config, relay })
}
