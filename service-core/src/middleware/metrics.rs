use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::observability::HttpMetrics;

/// Records the request counter and duration histogram once the inner service
/// has produced a response. `route` is the matched route template when the
/// router resolved one, otherwise the raw request path.
pub async fn metrics_middleware(
    State(metrics): State<HttpMetrics>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    metrics.record_request(&method, &route, response.status().as_u16(), start.elapsed());

    response
}
