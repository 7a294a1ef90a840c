//! Historical NAV retrieval: fetch, normalize, sort and window.

mod fetch;
pub mod merge;
pub mod normalize;
pub mod window;

pub use normalize::{ColumnRoles, ColumnTokens, RowValues, normalize};
pub use window::{DateWindow, sort_and_window};

use crate::core::{NavError, NavRecord, RawTable, TrendService};

/// Builder for one fund's NAV history.
///
/// ```no_run
/// # async fn demo() -> Result<(), fundnav_rs::NavError> {
/// let client = fundnav_rs::FundClient::builder().build()?;
/// let records = fundnav_rs::NavHistoryBuilder::new(&client, "000001")
///     .between("2023-01-01", "2023-06-30")
///     .fetch()
///     .await?;
/// # let _ = records;
/// # Ok(())
/// # }
/// ```
pub struct NavHistoryBuilder<'a> {
    service: &'a dyn TrendService,
    code: String,
    window: DateWindow,
    merge_cumulative: bool,
    tokens: ColumnTokens,
}

impl<'a> NavHistoryBuilder<'a> {
    pub fn new(service: &'a dyn TrendService, code: impl Into<String>) -> Self {
        Self {
            service,
            code: code.into(),
            window: DateWindow::default(),
            merge_cumulative: true,
            tokens: ColumnTokens::default(),
        }
    }

    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub fn start(mut self, date: impl Into<String>) -> Self {
        self.window.start = Some(date.into());
        self
    }

    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub fn end(mut self, date: impl Into<String>) -> Self {
        self.window.end = Some(date.into());
        self
    }

    pub fn between(self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start(start).end(end)
    }

    pub fn window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    /// Join the cumulative series into a unit series that lacks it. Default: `true`.
    pub fn merge_cumulative(mut self, yes: bool) -> Self {
        self.merge_cumulative = yes;
        self
    }

    /// Replace the column-name token table used by the normalizer.
    pub fn tokens(mut self, tokens: ColumnTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Fetches the raw provider table without normalizing it.
    pub async fn fetch_table(&self) -> Result<RawTable, NavError> {
        fetch::fetch_table(self.service, &self.code, self.merge_cumulative, &self.tokens).await
    }

    /// Runs the whole pipeline and returns records sorted by date within the window.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn fetch(self) -> Result<Vec<NavRecord>, NavError> {
        let table = self.fetch_table().await?;
        let records = normalize(&table, &self.tokens)?;
        Ok(sort_and_window(records, &self.window))
    }
}
