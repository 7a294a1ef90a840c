//! Command-line surface: argument model, JSON envelopes and the one-shot pipeline run.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use url::Url;

use crate::core::{FundClient, NavError, NavRecord, TrendService};
use crate::nav::NavHistoryBuilder;

/// Environment variable overriding the provider base URL.
pub const ENV_BASE_URL: &str = "FUNDNAV_BASE_URL";
/// Environment variable setting an overall request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "FUNDNAV_TIMEOUT_SECS";

/// Every argument is positional and may start with `-`; stdout only ever carries the envelope.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "fundnav",
    about = "Print a mutual fund's historical net asset values as JSON",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Fund code, passed to the provider as is.
    #[arg(allow_hyphen_values = true)]
    pub fund_code: Option<String>,

    /// Inclusive start date (YYYY-MM-DD).
    #[arg(allow_hyphen_values = true)]
    pub start_date: Option<String>,

    /// Inclusive end date (YYYY-MM-DD).
    #[arg(allow_hyphen_values = true)]
    pub end_date: Option<String>,

    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// The single JSON document written to stdout.
///
/// The missing-argument shape carries no `success` key; callers handle both shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success { success: bool, data: Vec<NavRecord> },
    Failure { success: bool, error: String },
    MissingArgument { error: String },
}

impl Envelope {
    pub fn success(data: Vec<NavRecord>) -> Self {
        Envelope::Success {
            success: true,
            data,
        }
    }

    pub fn failure(err: &NavError) -> Self {
        match err {
            NavError::MissingArgument => Envelope::MissingArgument {
                error: err.to_string(),
            },
            other => Envelope::Failure {
                success: false,
                error: other.to_string(),
            },
        }
    }

    /// Process status: `0` for success, `1` for any failure.
    pub fn status(&self) -> u8 {
        match self {
            Envelope::Success { .. } => 0,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Prints the envelope to stdout and returns the process exit code.
    pub fn emit(&self) -> ExitCode {
        match self.to_json() {
            Ok(json) => {
                println!("{json}");
                self.exit_code()
            }
            Err(e) => {
                println!(
                    "{}",
                    serde_json::json!({ "success": false, "error": format!("serialization failed: {e}") })
                );
                ExitCode::FAILURE
            }
        }
    }
}

/// Builds the provider client, applying environment overrides.
pub fn client_from_env() -> Result<FundClient, NavError> {
    let mut builder = FundClient::builder();

    if let Ok(raw) = std::env::var(ENV_BASE_URL) {
        let url = Url::parse(raw.trim())?;
        builder = builder.base_url(url);
    }
    if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
        let secs: u64 = raw.trim().parse().map_err(|_| {
            NavError::InvalidParams(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got '{raw}'"))
        })?;
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Runs the pipeline for the parsed arguments against `service`.
pub async fn run(cli: Cli, service: &dyn TrendService) -> Envelope {
    let Some(code) = cli.fund_code else {
        return Envelope::failure(&NavError::MissingArgument);
    };

    // an empty bound means unbounded on that side
    let bound = |s: Option<String>| s.filter(|s| !s.trim().is_empty());

    let mut builder = NavHistoryBuilder::new(service, code);
    if let Some(start) = bound(cli.start_date) {
        builder = builder.start(start);
    }
    if let Some(end) = bound(cli.end_date) {
        builder = builder.end(end);
    }

    match builder.fetch().await {
        Ok(data) => Envelope::success(data),
        Err(e) => Envelope::failure(&e),
    }
}
