//! Response bodies returned by the server.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedParticipant {
    pub user_id: String,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionStatus {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfo {
    pub nickname: String,
    pub has_voted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participants {
    pub users: Vec<ParticipantInfo>,
    pub total_users: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VoteCount {
    pub total: usize,
    pub voted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevealedVote {
    pub nickname: String,
    pub vote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FinalVotes {
    pub votes: Vec<RevealedVote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostLogin {
    pub session_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearedParticipants {
    pub cleared_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostParticipant {
    pub nickname: String,
    pub vote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DistributionEntry {
    pub vote: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostStatus {
    pub status: String,
    pub votes: Vec<RevealedVote>,
    pub all_users: Vec<HostParticipant>,
    pub distribution: Vec<DistributionEntry>,
}

/// Error body (`{"error": "..."}`)
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request body of `/api/join` and `/api/leave`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
}

/// Request body of `/api/vote`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteBody<'a> {
    pub user_id: &'a str,
    pub vote: &'a str,
}

/// Request body of `/api/host/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginBody<'a> {
    pub password: &'a str,
}
