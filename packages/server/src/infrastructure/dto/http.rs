//! HTTP API request and response DTOs.
//!
//! Field names follow the JSON contract consumed by the browser front-end
//! (`userId`, `hasVoted`, `totalUsers`, ...).

use serde::{Deserialize, Serialize};

// ========================================
// Requests
// ========================================

/// Body of `POST /api/join` (the body itself is optional).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub user_id: Option<String>,
}

/// Body of `POST /api/leave`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub user_id: Option<String>,
}

/// A vote as sent by clients: either `"5"` / `"?"` or the bare number `5`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawVote {
    Text(String),
    Number(i64),
}

/// Body of `POST /api/vote`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub user_id: Option<String>,
    pub vote: Option<RawVote>,
}

/// Body of `POST /api/host/login`.
#[derive(Debug, Deserialize)]
pub struct HostLoginRequest {
    pub password: Option<String>,
}

// ========================================
// Responses
// ========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub user_id: String,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub nickname: String,
    pub has_voted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsResponse {
    pub users: Vec<ParticipantDto>,
    pub total_users: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCountResponse {
    pub total: usize,
    pub voted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedVoteDto {
    pub nickname: String,
    pub vote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalVotesResponse {
    pub votes: Vec<RevealedVoteDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostLoginResponse {
    pub success: bool,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearUsersResponse {
    pub success: bool,
    pub cleared_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostParticipantDto {
    pub nickname: String,
    pub vote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntryDto {
    pub vote: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostStatusResponse {
    pub status: String,
    pub votes: Vec<RevealedVoteDto>,
    pub all_users: Vec<HostParticipantDto>,
    pub distribution: Vec<DistributionEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
