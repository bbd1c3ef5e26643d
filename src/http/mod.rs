// HTTP utilities module entry point

pub mod response;

// Re-export common builders
pub use response::{build_empty_response, build_text_response};
