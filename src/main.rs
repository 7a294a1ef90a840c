use std::process::ExitCode;

use clap::Parser;
use fundnav_rs::NavError;
use fundnav_rs::cli::{Cli, Envelope, client_from_env, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    #[cfg(feature = "tracing-subscriber")]
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let err = NavError::InvalidParams(e.to_string().trim_end().to_string());
            return Envelope::failure(&err).emit();
        }
    };

    if cli.fund_code.is_none() {
        return Envelope::failure(&NavError::MissingArgument).emit();
    }

    let client = match client_from_env() {
        Ok(c) => c,
        Err(e) => return Envelope::failure(&e).emit(),
    };

    run(cli, &client).await.emit()
}

#[cfg(feature = "tracing-subscriber")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // stdout is reserved for the JSON envelope
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
