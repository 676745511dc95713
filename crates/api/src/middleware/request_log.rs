use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emit one line per request with its method and path (query included),
/// before the request reaches a handler.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::info!(%method, %uri, "{method} request for {uri}");

    next.run(request).await
}
