//! Client execution logic.

use std::time::Duration;

use crate::{
    api::ApiClient,
    cli::{Command, HostCommand, TokenArg},
    error::ClientError,
    formatter::Formatter,
    types::{RevealedVote, VoteCount},
};

/// Run one CLI command against the server
pub async fn run_command(api: &ApiClient, command: Command) -> Result<(), ClientError> {
    match command {
        Command::Join { user_id } => {
            let joined = api.join(user_id.as_deref()).await?;
            println!("Joined as {}", joined.nickname);
            println!("User ID: {}", joined.user_id);
        }
        Command::Leave(user) => {
            api.leave(&user.user_id).await?;
            println!("Left the session");
        }
        Command::Vote { user, card } => {
            api.vote(&user.user_id, &card).await?;
            println!("Voted {}", card.trim());
        }
        Command::Status => {
            let status = api.session_status().await?;
            let count = api.vote_count().await?;
            println!("Status: {}", status.status);
            println!("{}", Formatter::format_vote_count(&count));
        }
        Command::Users => {
            let participants = api.participants().await?;
            print!("{}", Formatter::format_participants(&participants));
        }
        Command::Results => {
            let votes = api.final_votes().await?;
            print!("{}", Formatter::format_results(&votes.votes));
        }
        Command::Watch { interval_secs } => {
            watch(api, Duration::from_secs(interval_secs.max(1))).await?;
        }
        Command::Host { command } => run_host_command(api, command).await?,
    }
    Ok(())
}

async fn run_host_command(api: &ApiClient, command: HostCommand) -> Result<(), ClientError> {
    match command {
        HostCommand::Login { password } => {
            let token = api.host_login(&password).await?;
            println!("{}", token);
        }
        HostCommand::Logout(token) => {
            api.host_logout(&require_token(token)?).await?;
            println!("Logged out");
        }
        HostCommand::Start(token) => {
            api.host_start(&require_token(token)?).await?;
            println!("Voting started");
        }
        HostCommand::End(token) => {
            api.host_end(&require_token(token)?).await?;
            println!("Voting ended");
        }
        HostCommand::Reset(token) => {
            api.host_reset(&require_token(token)?).await?;
            println!("Session reset");
        }
        HostCommand::Clear(token) => {
            let cleared = api.host_clear(&require_token(token)?).await?;
            println!("Removed {} participants", cleared);
        }
        HostCommand::Status(token) => {
            let status = api.host_status(&require_token(token)?).await?;
            print!("{}", Formatter::format_host_status(&status));
        }
    }
    Ok(())
}

fn require_token(arg: TokenArg) -> Result<String, ClientError> {
    arg.token
        .filter(|token| !token.trim().is_empty())
        .ok_or(ClientError::MissingHostToken)
}

/// One poll of the public endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub status: String,
    pub count: VoteCount,
    pub votes: Vec<RevealedVote>,
}

/// Remembers the last snapshot and reports what changed
#[derive(Debug, Default)]
pub struct WatchState {
    last: Option<Snapshot>,
}

impl WatchState {
    /// Lines to print for `next`; empty when nothing changed
    pub fn update(&mut self, next: Snapshot) -> Vec<String> {
        let mut lines = Vec::new();
        let previous = self.last.as_ref();

        if previous.map(|p| &p.status) != Some(&next.status) {
            lines.push(format!("Status: {}", next.status));
        }
        if previous.map(|p| p.count) != Some(next.count) {
            lines.push(Formatter::format_vote_count(&next.count));
        }
        if !next.votes.is_empty() && previous.map(|p| &p.votes) != Some(&next.votes) {
            lines.push(Formatter::format_results(&next.votes));
        }

        self.last = Some(next);
        lines
    }
}

async fn poll(api: &ApiClient) -> Result<Snapshot, ClientError> {
    let status = api.session_status().await?.status;
    let count = api.vote_count().await?;
    let votes = if status == "ended" {
        api.final_votes().await?.votes
    } else {
        Vec::new()
    };
    Ok(Snapshot {
        status,
        count,
        votes,
    })
}

/// Poll at a fixed interval until Ctrl+C
pub async fn watch(api: &ApiClient, interval: Duration) -> Result<(), ClientError> {
    tracing::info!("Watching {} every {:?}", api.base_url(), interval);
    let mut ticker = tokio::time::interval(interval);
    let mut state = WatchState::default();

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopped watching");
                return Ok(());
            }
        }

        match poll(api).await {
            Ok(snapshot) => {
                for line in state.update(snapshot) {
                    println!("{}", line);
                }
            }
            // 一時的な失敗では止めない
            Err(ClientError::Connection(e)) => tracing::warn!("Poll failed: {}", e),
            Err(e) => return Err(e),
        }
    }
}
