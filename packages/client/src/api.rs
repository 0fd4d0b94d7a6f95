//! Typed HTTP client for the planning poker API.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    error::ClientError,
    types::{
        ClearedParticipants, ErrorBody, FinalVotes, HostLogin, HostStatus, JoinedParticipant,
        LoginBody, Participants, SessionStatus, UserIdBody, VoteBody, VoteCount,
    },
    vote::validate_vote,
};

/// Header carrying the host token.
pub const HOST_SESSION_HEADER: &str = "x-host-session-id";

/// API client bound to one server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the JSON body, turning error bodies into
    /// [`ClientError::Api`].
    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        tracing::debug!("request failed with {}: {}", status, message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn host_request(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header(HOST_SESSION_HEADER, token)
    }

    // ========================================
    // Participant API
    // ========================================

    /// Join the session, reusing `user_id` when given
    pub async fn join(&self, user_id: Option<&str>) -> Result<JoinedParticipant, ClientError> {
        Self::send(
            self.http
                .post(self.url("/api/join"))
                .json(&UserIdBody { user_id }),
        )
        .await
    }

    pub async fn leave(&self, user_id: &str) -> Result<(), ClientError> {
        Self::send::<serde_json::Value>(
            self.http.post(self.url("/api/leave")).json(&UserIdBody {
                user_id: Some(user_id),
            }),
        )
        .await
        .map(drop)
    }

    /// Submit a vote; the token is checked against the deck before sending
    pub async fn vote(&self, user_id: &str, token: &str) -> Result<(), ClientError> {
        let vote = validate_vote(token)?;
        Self::send::<serde_json::Value>(
            self.http
                .post(self.url("/api/vote"))
                .json(&VoteBody { user_id, vote }),
        )
        .await
        .map(drop)
    }

    pub async fn session_status(&self) -> Result<SessionStatus, ClientError> {
        Self::send(self.http.get(self.url("/api/session"))).await
    }

    pub async fn participants(&self) -> Result<Participants, ClientError> {
        Self::send(self.http.get(self.url("/api/users"))).await
    }

    pub async fn vote_count(&self) -> Result<VoteCount, ClientError> {
        Self::send(self.http.get(self.url("/api/vote-count"))).await
    }

    pub async fn final_votes(&self) -> Result<FinalVotes, ClientError> {
        Self::send(self.http.get(self.url("/api/votes"))).await
    }

    // ========================================
    // Host API
    // ========================================

    /// Log in and return the host token
    pub async fn host_login(&self, password: &str) -> Result<String, ClientError> {
        let login: HostLogin = Self::send(
            self.http
                .post(self.url("/api/host/login"))
                .json(&LoginBody { password }),
        )
        .await?;
        Ok(login.session_id)
    }

    pub async fn host_logout(&self, token: &str) -> Result<(), ClientError> {
        self.host_command("/api/host/logout", token).await
    }

    pub async fn host_start(&self, token: &str) -> Result<(), ClientError> {
        self.host_command("/api/host/start", token).await
    }

    pub async fn host_end(&self, token: &str) -> Result<(), ClientError> {
        self.host_command("/api/host/end", token).await
    }

    pub async fn host_reset(&self, token: &str) -> Result<(), ClientError> {
        self.host_command("/api/host/reset", token).await
    }

    /// Remove every participant and return how many were removed
    pub async fn host_clear(&self, token: &str) -> Result<usize, ClientError> {
        let cleared: ClearedParticipants = Self::send(
            self.host_request(self.http.post(self.url("/api/host/clear-users")), token),
        )
        .await?;
        Ok(cleared.cleared_count)
    }

    pub async fn host_status(&self, token: &str) -> Result<HostStatus, ClientError> {
        Self::send(self.host_request(self.http.get(self.url("/api/host/status")), token)).await
    }

    async fn host_command(&self, path: &str, token: &str) -> Result<(), ClientError> {
        Self::send::<serde_json::Value>(self.host_request(self.http.post(self.url(path)), token))
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        // テスト項目: ベース URL 末尾のスラッシュは取り除かれる
        // when (操作):
        let client = ApiClient::new("http://127.0.0.1:3000/");

        // then (期待する結果):
        assert_eq!(client.base_url(), "http://127.0.0.1:3000");
        assert_eq!(client.url("/api/join"), "http://127.0.0.1:3000/api/join");
    }

    #[tokio::test]
    async fn test_invalid_vote_is_rejected_before_sending() {
        // テスト項目: デッキ外の投票はリクエストを送らずに拒否される
        // given (前提条件): 接続できないアドレス
        let client = ApiClient::new("http://127.0.0.1:1");

        // when (操作):
        let result = client.vote("user_a", "7").await;

        // then (期待する結果): 接続エラーではなく InvalidVote
        assert!(matches!(result, Err(ClientError::InvalidVote(_))));
    }
}
