use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NavError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The provider returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the provider was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A configuration value could not be used.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// No fund code was supplied on the command line.
    #[error("missing required argument: fund code")]
    MissingArgument,

    /// Every retrieval variant failed or returned an empty table.
    #[error(
        "no NAV data available for fund {code}, check that the fund code is correct; last error: {}",
        last_error.as_deref().unwrap_or("none")
    )]
    NoDataAvailable {
        /// The fund code that was requested.
        code: String,
        /// Message of the last underlying error, if any variant failed outright.
        last_error: Option<String>,
    },

    /// Data was returned but no row carried a date and a positive net value.
    #[error("no valid NAV records could be extracted from the returned data")]
    NoValidRecords,
}
