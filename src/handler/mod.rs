//! Request handler module
//!
//! Routing dispatch plus the three endpoint handlers: the Magic 8-Ball
//! answer page, the host IP listing, and the fixed test page.

pub mod ip;
pub mod oracle;
pub mod router;
pub mod test_page;

// Re-export main entry point
pub use router::handle_request;
