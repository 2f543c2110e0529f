use clap::Parser;

use crate::models::search::DEFAULT_LIMIT;

#[derive(Parser, Debug, Clone)]
#[command(name = "globejobs", about = "Aggregated job search across public job boards")]
pub struct Config {
    /// Seconds to wait for each provider before treating it as failed
    #[arg(
        long,
        env = "PROVIDER_TIMEOUT_SECS",
        default_value = "15",
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub provider_timeout_secs: u64,

    /// Override the Remotive feed endpoint
    #[arg(long, env = "REMOTIVE_URL", global = true)]
    pub remotive_url: Option<String>,

    /// Override the Arbeitnow feed endpoint
    #[arg(long, env = "ARBEITNOW_URL", global = true)]
    pub arbeitnow_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the web server (default when no subcommand given)
    Serve {
        /// Listen address
        #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
        listen_addr: String,
    },
    /// Run one search and print the JSON response
    Search {
        /// Matched against title, company and tags
        #[arg(default_value = "")]
        query: String,

        /// Matched against location; "remote" also matches remote jobs
        #[arg(long, default_value = "")]
        location: String,

        /// Maximum number of jobs, clamped to 1..=100
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_timeout_secs: 15,
            remotive_url: None,
            arbeitnow_url: None,
            command: None,
        }
    }
}

impl Config {
    /// Resolve the command, defaulting to Serve if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        })
    }

    /// Configured endpoint for the feed with this prefix, if overridden.
    pub fn endpoint_override(&self, prefix: &str) -> Option<&str> {
        let url = match prefix {
            "remotive" => self.remotive_url.as_deref(),
            "arbeitnow" => self.arbeitnow_url.as_deref(),
            _ => None,
        };
        url.filter(|u| !u.trim().is_empty())
    }

    pub fn provider_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.provider_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_subcommand_parses_flags() {
        let config = Config::try_parse_from([
            "globejobs",
            "search",
            "rust",
            "--location",
            "remote",
            "--limit",
            "5",
            "--provider-timeout-secs",
            "3",
        ])
        .unwrap();

        assert_eq!(config.provider_timeout_secs, 3);
        match config.resolved_command() {
            Command::Search {
                query,
                location,
                limit,
            } => {
                assert_eq!(query, "rust");
                assert_eq!(location, "remote");
                assert_eq!(limit, 5);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn zero_provider_timeout_is_rejected() {
        let err = Config::try_parse_from(["globejobs", "--provider-timeout-secs", "0"])
            .expect_err("zero timeout should not parse");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let config = Config::try_parse_from(["globejobs", "--provider-timeout-secs", "1"]).unwrap();
        assert_eq!(config.provider_timeout(), std::time::Duration::from_secs(1));
    }

    #[test]
    fn endpoint_overrides_are_keyed_by_prefix() {
        let config = Config {
            remotive_url: Some("http://127.0.0.1:9000/remotive".to_string()),
            arbeitnow_url: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.endpoint_override("remotive"),
            Some("http://127.0.0.1:9000/remotive")
        );
        assert_eq!(config.endpoint_override("arbeitnow"), None);
        assert_eq!(config.endpoint_override("unknown"), None);
    }
}
