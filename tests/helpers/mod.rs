#![allow(dead_code)] // each test binary uses a different subset

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use kodenox::config::{Config, ObservabilityConfig, RelayConfig, ServerConfig};
use kodenox::contact::{RelayClient, RelayError};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        relay: RelayConfig {
            public_key: "pk_test".to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            ..RelayConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

/// Build the app with a mock relay scripted to the given outcome; the
/// returned client shares the dispatch counter with the app's copy.
pub fn app_with_relay(config: Config, outcome: Option<RelayError>) -> (Router, RelayClient) {
    let relay = RelayClient::new_mock(config.relay.clone(), outcome);
    let app = kodenox::create_app(config, relay.clone());
    (app, relay)
}

pub fn app() -> Router {
    app_with_relay(test_config(), None).0
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
