//! Request middleware
//!
//! Every request gets an id that is logged with its span and echoed back in
//! the `x-request-id` response header, so a failed chat exchange seen by a
//! client can be matched to the server log line that explains it.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Header carrying the request id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse a well-formed caller-supplied id, otherwise mint a fresh one
fn request_id_for(request: &Request) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Request ID middleware - tags the span, logs completion, echoes the id
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request_id_for(&request);
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!("request", request_id = %request_id, method = %method, uri = %uri);
    let mut response = next.run(request).instrument(span).await;

    info!(
        request_id = %request_id,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    match HeaderValue::from_str(&request_id) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        Err(e) => tracing::warn!(error = %e, "Request id is not a valid header value"),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with(header: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/api/chat");
        if let Some(value) = header {
            builder = builder.header(REQUEST_ID_HEADER, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_request_id_reuses_caller_value() {
        let request = request_with(Some("client-42"));
        assert_eq!(request_id_for(&request), "client-42");
    }

    #[test]
    fn test_request_id_generated_when_missing_or_blank() {
        let generated = request_id_for(&request_with(None));
        assert!(Uuid::parse_str(&generated).is_ok());

        let generated = request_id_for(&request_with(Some("   ")));
        assert!(Uuid::parse_str(&generated).is_ok());
    }
}
