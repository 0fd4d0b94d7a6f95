//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mitsumori-client")]
#[command(about = "Planning poker client", long_about = None)]
pub struct Cli {
    /// Server base URL
    #[arg(short = 'u', long, env = "MITSUMORI_URL", default_value = "http://127.0.0.1:3000")]
    pub url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Join the session (pass --user-id to rejoin under the same nickname)
    Join {
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Leave the session
    Leave(UserIdArg),
    /// Vote with a card from the deck (0 1 2 3 5 8 13 21 34 55 89 ?)
    Vote {
        #[command(flatten)]
        user: UserIdArg,
        card: String,
    },
    /// Show the session status
    Status,
    /// List participants
    Users,
    /// Show revealed votes
    Results,
    /// Poll the session and print changes
    Watch {
        /// Seconds between polls
        #[arg(long, default_value_t = 3)]
        interval_secs: u64,
    },
    /// Host commands
    Host {
        #[command(subcommand)]
        command: HostCommand,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum HostCommand {
    /// Log in and print the host token
    Login {
        #[arg(long, env = "HOST_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Invalidate the host token
    Logout(TokenArg),
    /// Start voting
    Start(TokenArg),
    /// End voting and reveal votes
    End(TokenArg),
    /// Return to waiting
    Reset(TokenArg),
    /// Remove every participant
    Clear(TokenArg),
    /// Show everything the host sees
    Status(TokenArg),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct UserIdArg {
    /// Participant id returned by `join`
    #[arg(long, env = "MITSUMORI_USER_ID")]
    pub user_id: String,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct TokenArg {
    /// Host token returned by `host login`
    #[arg(long, env = "MITSUMORI_HOST_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vote() {
        // テスト項目: vote サブコマンドの解析
        // when (操作):
        let cli = Cli::try_parse_from([
            "mitsumori-client",
            "vote",
            "--user-id",
            "user_a",
            "?",
        ])
        .unwrap();

        // then (期待する結果):
        assert_eq!(
            cli.command,
            Command::Vote {
                user: UserIdArg {
                    user_id: "user_a".to_string()
                },
                card: "?".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_host_start_with_token() {
        // テスト項目: host start サブコマンドの解析
        // when (操作):
        let cli = Cli::try_parse_from([
            "mitsumori-client",
            "--url",
            "http://poker.local",
            "host",
            "start",
            "--token",
            "host_abc",
        ])
        .unwrap();

        // then (期待する結果):
        assert_eq!(cli.url, "http://poker.local");
        assert_eq!(
            cli.command,
            Command::Host {
                command: HostCommand::Start(TokenArg {
                    token: Some("host_abc".to_string())
                })
            }
        );
    }
}
