use axum::{
    body::Body,
    http::{header, Request, Response},
    middleware::Next,
};

/// Middleware to set cache control headers
/// - Embedded static assets: cache aggressively (1 year)
/// - Rendered pages and fragments: no caching
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    if is_static {
        headers.insert(
            header::CACHE_CONTROL,
            "public, max-age=31536000, immutable".parse().unwrap(),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate".parse().unwrap(),
        );
    }

    response
}
