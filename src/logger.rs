//! Logger module
//!
//! Timestamped logging to stdout/stderr for server lifecycle, access, and
//! error events.

use chrono::Local;
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Write to info/access log
fn write_info(message: &str) {
    println!("[{}] {message}", timestamp());
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("[{}] {message}", timestamp());
}

pub fn log_server_start(addr: &SocketAddr) {
    write_info("======================================");
    write_info("Server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("  http://localhost:{}/", addr.port()));
    write_info(&format!("  http://localhost:{}/ip", addr.port()));
    write_info(&format!("  http://localhost:{}/test", addr.port()));
    write_info("======================================");
}

pub fn log_request(method: &str, path: &str) {
    write_info(&format!("[Request] {method} {path}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}
