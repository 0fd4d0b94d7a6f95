//! Card deck shared with the server.

use crate::error::ClientError;

/// Valid vote tokens in display order.
pub const DECK: [&str; 12] = [
    "0", "1", "2", "3", "5", "8", "13", "21", "34", "55", "89", "?",
];

/// Check a vote token before it is sent.
///
/// Surrounding whitespace is ignored.
pub fn validate_vote(token: &str) -> Result<&'static str, ClientError> {
    let token = token.trim();
    DECK.iter()
        .find(|card| **card == token)
        .copied()
        .ok_or_else(|| ClientError::InvalidVote(token.to_string()))
}
