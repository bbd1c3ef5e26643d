//! Magic 8-Ball answer handler
//!
//! Serves one pseudorandomly chosen entry from the fixed answer set.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

use crate::config::AppState;
use crate::http;

/// The classic Magic 8-Ball answer set, in canonical order.
pub const ANSWERS: [&str; 20] = [
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes definitely",
    "You may rely on it",
    "As I see it yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
    "Reply hazy try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

/// Respond with one uniformly chosen answer
pub fn serve_answer(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let answer = ANSWERS[state.random_index(ANSWERS.len())];
    http::build_text_response(answer)
}
