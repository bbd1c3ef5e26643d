//! Host IP handler
//!
//! Lists the host's non-loopback IPv4 addresses, one per line, in the order
//! the OS reports them.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::net::{IpAddr, Ipv4Addr};

use crate::http;
use crate::logger;

/// Respond with the host's non-loopback IPv4 addresses.
///
/// Enumeration failure is logged and answered with an empty 200 body; the
/// client never sees an error status on this route.
pub fn serve_ip_list() -> Response<Full<Bytes>> {
    match local_ipv4_addrs() {
        Ok(addrs) => http::build_text_response(format_addr_lines(&addrs)),
        Err(e) => {
            logger::log_error(&format!("Failed to enumerate interface addresses: {e}"));
            http::build_empty_response()
        }
    }
}

/// Enumerate interface addresses and keep non-loopback IPv4 ones.
fn local_ipv4_addrs() -> std::io::Result<Vec<Ipv4Addr>> {
    let interfaces = if_addrs::get_if_addrs()?;
    Ok(collect_ipv4(interfaces.iter().map(if_addrs::Interface::ip)))
}

/// Filter to non-loopback IPv4, preserving enumeration order.
fn collect_ipv4(addrs: impl Iterator<Item = IpAddr>) -> Vec<Ipv4Addr> {
    addrs
        .filter_map(|addr| match addr {
            IpAddr::V4(v4) if !v4.is_loopback() => Some(v4),
            _ => None,
        })
        .collect()
}

/// One address per line, each line newline-terminated.
fn format_addr_lines(addrs: &[Ipv4Addr]) -> String {
    addrs.iter().map(|a| format!("{a}\n")).collect()
}
