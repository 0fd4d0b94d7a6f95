//! Conversion logic between DTOs and domain models.

use crate::domain::{
    Session, ValueObjectError, Vote,
    projection::{
        HostParticipantRow, HostView, ParticipantSummary, ParticipantView, RevealedVote,
        VoteTally,
    },
};
use crate::infrastructure::dto::http as dto;

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<dto::RawVote> for Vote {
    type Error = ValueObjectError;

    fn try_from(raw: dto::RawVote) -> Result<Self, Self::Error> {
        match raw {
            dto::RawVote::Text(text) => text.parse(),
            dto::RawVote::Number(points) => Vote::from_points(points),
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&Session> for dto::SessionStatusResponse {
    fn from(session: &Session) -> Self {
        Self {
            status: session.status.to_string(),
        }
    }
}

impl From<ParticipantSummary> for dto::ParticipantDto {
    fn from(summary: ParticipantSummary) -> Self {
        Self {
            nickname: summary.nickname.into_string(),
            has_voted: summary.has_voted,
        }
    }
}

impl From<ParticipantView> for dto::ParticipantsResponse {
    fn from(view: ParticipantView) -> Self {
        Self {
            users: view.participants.into_iter().map(Into::into).collect(),
            total_users: view.total_users,
        }
    }
}

impl From<VoteTally> for dto::VoteCountResponse {
    fn from(tally: VoteTally) -> Self {
        Self {
            total: tally.total,
            voted: tally.voted,
        }
    }
}

impl From<RevealedVote> for dto::RevealedVoteDto {
    fn from(revealed: RevealedVote) -> Self {
        Self {
            nickname: revealed.nickname.into_string(),
            vote: revealed.vote.to_string(),
        }
    }
}

impl From<HostParticipantRow> for dto::HostParticipantDto {
    fn from(row: HostParticipantRow) -> Self {
        Self {
            nickname: row.nickname.into_string(),
            vote: row.vote.map(|vote| vote.to_string()),
        }
    }
}

impl From<HostView> for dto::HostStatusResponse {
    fn from(view: HostView) -> Self {
        Self {
            status: view.status.to_string(),
            votes: view.votes.into_iter().map(Into::into).collect(),
            all_users: view.all_users.into_iter().map(Into::into).collect(),
            distribution: view
                .distribution
                .into_iter()
                .map(|(vote, count)| dto::DistributionEntryDto {
                    vote: vote.to_string(),
                    count,
                })
                .collect(),
        }
    }
}
