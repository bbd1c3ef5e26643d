//! Test page handler

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http;

/// Fixed body returned for every request under `/test`.
pub const TEST_PAGE_BODY: &str = "The test page";

/// Respond with the fixed test page
pub fn serve_test_page() -> Response<Full<Bytes>> {
    http::build_text_response(TEST_PAGE_BODY)
}
