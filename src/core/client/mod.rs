//! Public client surface + builder.
//! Defaults (UA, endpoint) live in `constants`.

mod constants;

use crate::core::NavError;
use constants::{DEFAULT_BASE_URL, DEFAULT_SCRIPT_TTL, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

/// Last script body fetched, keyed by fund code.
///
/// Both trend series live in one provider script, so a merge reads it once.
#[derive(Debug)]
struct ScriptMemo {
    ttl: Duration,
    last: RwLock<Option<MemoEntry>>,
}

#[derive(Debug)]
struct MemoEntry {
    code: String,
    body: Arc<str>,
    expires_at: Instant,
}

/// HTTP client for the fund trend provider.
///
/// Cheap to clone; clones share the underlying connection pool and script memo.
#[derive(Debug, Clone)]
pub struct FundClient {
    http: Client,
    base_url: Url,
    memo: Option<Arc<ScriptMemo>>,
}

impl FundClient {
    /// Create a new builder.
    pub fn builder() -> FundClientBuilder {
        FundClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Script URL for `code`; the code becomes one percent-encoded path segment.
    pub(crate) fn script_url(&self, code: &str) -> Result<Url, NavError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                NavError::InvalidParams(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(&format!("{code}.js"));
        Ok(url)
    }

    pub(crate) async fn memo_get(&self, code: &str) -> Option<Arc<str>> {
        let memo = self.memo.as_ref()?;
        let guard = memo.last.read().await;
        match guard.as_ref() {
            Some(e) if e.code == code && Instant::now() <= e.expires_at => Some(e.body.clone()),
            _ => None,
        }
    }

    pub(crate) async fn memo_put(&self, code: &str, body: Arc<str>) {
        let Some(memo) = self.memo.as_ref() else {
            return;
        };
        *memo.last.write().await = Some(MemoEntry {
            code: code.to_string(),
            body,
            expires_at: Instant::now() + memo.ttl,
        });
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FundClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    script_ttl: Option<Duration>,
}

impl FundClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the script base (e.g., `http://fund.eastmoney.com/pingzhongdata/`).
    ///
    /// The base should end with `/` so that `{code}.js` is appended rather than replacing the last segment.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// How long a fetched script is reused for the same fund code. Default: 30 seconds.
    /// `Duration::ZERO` fetches on every call.
    pub fn script_ttl(mut self, dur: Duration) -> Self {
        self.script_ttl = Some(dur);
        self
    }

    pub fn build(self) -> Result<FundClient, NavError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let ttl = self.script_ttl.unwrap_or(DEFAULT_SCRIPT_TTL);

        Ok(FundClient {
            http: httpb.build()?,
            base_url,
            memo: (!ttl.is_zero()).then(|| {
                Arc::new(ScriptMemo {
                    ttl,
                    last: RwLock::new(None),
                })
            }),
        })
    }
}
