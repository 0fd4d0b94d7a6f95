//! Text formatting for client output.

use crate::types::{DistributionEntry, HostStatus, Participants, RevealedVote, VoteCount};

const RULE: &str = "============================================================";

/// Formatter for client display
pub struct Formatter;

impl Formatter {
    /// Format the participant list
    ///
    /// Participants who already voted are marked with `✔`.
    pub fn format_participants(participants: &Participants) -> String {
        let mut output = String::new();
        output.push_str(&format!("Participants ({}):\n", participants.total_users));

        if participants.users.is_empty() {
            output.push_str("(No participants)\n");
        } else {
            for user in &participants.users {
                let mark = if user.has_voted { "✔" } else { " " };
                output.push_str(&format!("  [{}] {}\n", mark, user.nickname));
            }
        }
        output
    }

    pub fn format_vote_count(count: &VoteCount) -> String {
        format!("Votes: {}/{}", count.voted, count.total)
    }

    /// Format revealed votes
    pub fn format_results(votes: &[RevealedVote]) -> String {
        let mut output = String::new();
        output.push_str(RULE);
        output.push('\n');
        output.push_str("Results:\n");

        if votes.is_empty() {
            output.push_str("(No votes)\n");
        } else {
            for vote in votes {
                output.push_str(&format!("  {:>3}  {}\n", vote.vote, vote.nickname));
            }
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format the vote distribution as a bar chart
    pub fn format_distribution(distribution: &[DistributionEntry]) -> String {
        let mut output = String::new();
        for entry in distribution {
            output.push_str(&format!(
                "  {:>3} | {} {}\n",
                entry.vote,
                "#".repeat(entry.count),
                entry.count
            ));
        }
        output
    }

    /// Format the host view
    pub fn format_host_status(status: &HostStatus) -> String {
        let mut output = String::new();
        output.push_str(&format!("Status: {}\n", status.status));
        output.push_str(&format!("Participants ({}):\n", status.all_users.len()));
        for user in &status.all_users {
            let vote = user.vote.as_deref().unwrap_or("-");
            output.push_str(&format!("  {:>3}  {}\n", vote, user.nickname));
        }
        if !status.distribution.is_empty() {
            output.push_str("Distribution:\n");
            output.push_str(&Self::format_distribution(&status.distribution));
        }
        output
    }
}
