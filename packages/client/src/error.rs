//! Error types for the planning poker client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error body
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// Vote token outside the deck (rejected before sending)
    #[error("'{0}' is not a valid card; choose one of {deck}", deck = crate::vote::DECK.join(", "))]
    InvalidVote(String),

    /// A host command was issued without a token
    #[error("Host token required; run `host login` first and pass --token")]
    MissingHostToken,
}

impl ClientError {
    /// Whether the server rejected the host token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }
}
