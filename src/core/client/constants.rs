//! Centralized constants for the default endpoint and UA.

/// Default desktop UA; the provider rejects some non-browser agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// East Money fund script base (`{code}.js` is appended).
pub(crate) const DEFAULT_BASE_URL: &str = "http://fund.eastmoney.com/pingzhongdata/";

/// Reuse window for a fetched script; covers the second read of a merge.
pub(crate) const DEFAULT_SCRIPT_TTL: std::time::Duration = std::time::Duration::from_secs(30);
