//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: logs the request and dispatches
//! on path prefix. Every route accepts every method.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::{ip, oracle, test_page};
use crate::logger;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().as_str();
    let path = req.uri().path();

    if state.config.logging.access_log {
        logger::log_request(method, path);
    }

    Ok(route_request(path, &state))
}

/// Dispatch on path prefix; everything unmatched falls through to the
/// answer handler, like a root catch-all registration.
fn route_request(path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    if matches_prefix(path, "/ip") {
        return ip::serve_ip_list();
    }
    if matches_prefix(path, "/test") {
        return test_page::serve_test_page();
    }
    oracle::serve_answer(state)
}

/// `/ip` matches `/ip`, `/ip/`, and any subpath below it, mirroring
/// trailing-slash prefix registration.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig};
    use crate::handler::oracle::ANSWERS;
    use crate::handler::test_page::TEST_PAGE_BODY;
    use http_body_util::BodyExt;
    use std::net::Ipv4Addr;

    fn test_state() -> Arc<AppState> {
        let cfg = Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            logging: LoggingConfig { access_log: false },
        };
        Arc::new(AppState::with_seed(&cfg, 7))
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_prefix_matching() {
        assert!(matches_prefix("/test", "/test"));
        assert!(matches_prefix("/test/", "/test"));
        assert!(matches_prefix("/test/anything", "/test"));
        assert!(!matches_prefix("/testing", "/test"));
        assert!(!matches_prefix("/", "/test"));
    }

    #[tokio::test]
    async fn test_test_route_returns_fixed_body() {
        let state = test_state();
        for path in ["/test", "/test/", "/test/deeper/path"] {
            let resp = route_request(path, &state);
            assert_eq!(resp.status(), 200);
            assert_eq!(body_string(resp).await, TEST_PAGE_BODY);
        }
    }

    #[tokio::test]
    async fn test_root_returns_an_answer() {
        let state = test_state();
        for path in ["/", "/anything-else", "/testing"] {
            let resp = route_request(path, &state);
            assert_eq!(resp.status(), 200);
            let body = body_string(resp).await;
            assert!(ANSWERS.contains(&body.as_str()), "unexpected body: {body}");
        }
    }

    #[tokio::test]
    async fn test_ip_route_lists_valid_addresses() {
        let state = test_state();
        let resp = route_request("/ip/", &state);
        assert_eq!(resp.status(), 200);
        let body = body_string(resp).await;
        for line in body.lines() {
            let addr: Ipv4Addr = line.parse().unwrap();
            assert!(!addr.is_loopback());
        }
    }
}
