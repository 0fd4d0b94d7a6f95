//! Read projections for client-visible views.
//!
//! This module contains pure functions that derive what participants and the
//! host are allowed to see from the current session status and roster,
//! without side effects, making them easy to test.
//!
//! Visibility rules:
//! - participants only see *whether* someone voted, and only while voting
//! - individual vote values are revealed to participants only after `ended`
//! - the host always sees everything, including live votes

use std::collections::BTreeMap;

use super::{
    entity::Participant,
    value_object::{Nickname, SessionStatus, Vote},
};

/// A participant row as seen by other participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSummary {
    pub nickname: Nickname,
    pub has_voted: bool,
}

/// Participant-facing roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantView {
    pub participants: Vec<ParticipantSummary>,
    pub total_users: usize,
}

/// Vote progress counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub total: usize,
    pub voted: usize,
}

/// A revealed vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedVote {
    pub nickname: Nickname,
    pub vote: Vote,
}

/// A roster row as seen by the host (raw, unfiltered vote).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParticipantRow {
    pub nickname: Nickname,
    pub vote: Option<Vote>,
}

/// Everything the host sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostView {
    pub status: SessionStatus,
    pub votes: Vec<RevealedVote>,
    pub all_users: Vec<HostParticipantRow>,
    pub distribution: Vec<(Vote, usize)>,
}

/// Build the participant-facing roster.
///
/// `has_voted` is only ever `true` while the session is `voting`; leftover
/// votes from a previous round are masked in `waiting` and `ended`.
pub fn participant_view(status: SessionStatus, roster: &[Participant]) -> ParticipantView {
    let show_vote_status = status == SessionStatus::Voting;

    ParticipantView {
        participants: roster
            .iter()
            .map(|p| ParticipantSummary {
                nickname: p.nickname.clone(),
                has_voted: show_vote_status && p.has_vote(),
            })
            .collect(),
        total_users: roster.len(),
    }
}

/// Count participants and how many of them hold a vote.
pub fn vote_tally(roster: &[Participant]) -> VoteTally {
    VoteTally {
        total: roster.len(),
        voted: roster.iter().filter(|p| p.has_vote()).count(),
    }
}

/// Reveal individual votes.
///
/// Empty unless the session is `ended`; otherwise one entry per participant
/// holding a vote, in roster order.
pub fn final_votes(status: SessionStatus, roster: &[Participant]) -> Vec<RevealedVote> {
    if status != SessionStatus::Ended {
        return Vec::new();
    }

    roster
        .iter()
        .filter_map(|p| {
            p.current_vote.map(|vote| RevealedVote {
                nickname: p.nickname.clone(),
                vote,
            })
        })
        .collect()
}

/// Histogram over non-null votes, in display order.
///
/// Numeric tokens ascend and `?` is always last; tokens nobody picked are
/// omitted.
pub fn vote_distribution(roster: &[Participant]) -> Vec<(Vote, usize)> {
    let mut counts: BTreeMap<Vote, usize> = BTreeMap::new();
    for vote in roster.iter().filter_map(|p| p.current_vote) {
        *counts.entry(vote).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Build the host view.
pub fn host_view(status: SessionStatus, roster: &[Participant]) -> HostView {
    HostView {
        status,
        votes: final_votes(status, roster),
        all_users: roster
            .iter()
            .map(|p| HostParticipantRow {
                nickname: p.nickname.clone(),
                vote: p.current_vote,
            })
            .collect(),
        distribution: vote_distribution(roster),
    }
}
