//! HTTP response building module
//!
//! Plain-text response builders, decoupled from handler logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 plain-text response
pub fn build_text_response(body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(body.into()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 response with an empty body
pub fn build_empty_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("empty 200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
