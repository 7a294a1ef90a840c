use crate::core::{Indicator, NavError, RawTable};

/// A trait for sources that can return a fund's trend series as a raw table.
///
/// This decouples the fetch/normalize pipeline from the HTTP provider, so the same
/// pipeline runs against [`FundClient`](crate::core::FundClient) or any in-memory table source.
pub trait TrendService: Send + Sync {
    /// Asynchronously fetches one trend series for a fund.
    ///
    /// # Arguments
    /// * `code` - The fund code, passed through uninterpreted.
    /// * `indicator` - Which series to fetch.
    ///
    /// # Returns
    /// A `Future` resolving to the raw table (possibly empty) or a `NavError`.
    fn fetch_trend<'a>(
        &'a self,
        code: &'a str,
        indicator: Indicator,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<RawTable, NavError>> + Send + 'a>>;
}
