//! East Money trend series.
//!
//! The provider serves one JavaScript file per fund that declares, among other variables,
//! the unit-NAV series (`Data_netWorthTrend`) and the cumulative-NAV series
//! (`Data_ACWorthTrend`). Each series is decoded into a [`RawTable`] whose column names
//! follow the provider's own (Chinese) labels.

pub(crate) mod wire;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Asia::Shanghai;

use crate::core::{Cell, FundClient, Indicator, NavError, RawTable, TrendService};
use wire::{AcWorthPoint, NetWorthPoint, extract_js_array};

/// Date column label used by both series.
pub const DATE_COLUMN: &str = "净值日期";
/// Unit net value column label.
pub const UNIT_NAV_COLUMN: &str = "单位净值";
/// Daily return column label.
pub const DAILY_RETURN_COLUMN: &str = "日增长率";
/// Cumulative net value column label.
pub const CUMULATIVE_NAV_COLUMN: &str = "累计净值";

const UNIT_TREND_VAR: &str = "Data_netWorthTrend";
const CUMULATIVE_TREND_VAR: &str = "Data_ACWorthTrend";

impl FundClient {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn fetch_script(&self, code: &str) -> Result<Arc<str>, NavError> {
        if let Some(body) = self.memo_get(code).await {
            return Ok(body);
        }

        let url = self.script_url(code)?;
        let resp = self.http().get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(NavError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        let body: Arc<str> = resp.text().await?.into();

        #[cfg(feature = "test-mode")]
        crate::core::fixtures::record_if_enabled("pingzhongdata", code, "js", &body);

        self.memo_put(code, body.clone()).await;
        Ok(body)
    }
}

impl TrendService for FundClient {
    fn fetch_trend<'a>(
        &'a self,
        code: &'a str,
        indicator: Indicator,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<RawTable, NavError>> + Send + 'a>>
    {
        Box::pin(async move {
            let body = self.fetch_script(code).await?;
            decode_trend(&body, indicator)
        })
    }
}

/// Decodes one series out of a provider script body.
///
/// An empty series yields an empty table, not an error.
pub fn decode_trend(body: &str, indicator: Indicator) -> Result<RawTable, NavError> {
    match indicator {
        Indicator::UnitNavTrend => {
            let points: Vec<NetWorthPoint> = parse_var(body, UNIT_TREND_VAR)?;
            let mut table = RawTable::new([DATE_COLUMN, UNIT_NAV_COLUMN, DAILY_RETURN_COLUMN]);
            for p in points {
                table.push_row(vec![
                    date_cell(p.x),
                    Cell::number(p.y),
                    Cell::number(p.equity_return),
                ])?;
            }
            Ok(table)
        }
        Indicator::CumulativeNavTrend => {
            let points: Vec<AcWorthPoint> = parse_var(body, CUMULATIVE_TREND_VAR)?;
            let mut table = RawTable::new([DATE_COLUMN, CUMULATIVE_NAV_COLUMN]);
            for AcWorthPoint(ms, value) in points {
                table.push_row(vec![date_cell(ms), Cell::number(value)])?;
            }
            Ok(table)
        }
    }
}

fn parse_var<T: serde::de::DeserializeOwned>(body: &str, var: &str) -> Result<Vec<T>, NavError> {
    let raw = extract_js_array(body, var)
        .ok_or_else(|| NavError::Data(format!("{var} not found in provider script")))?;
    serde_json::from_str(raw).map_err(|e| NavError::Data(format!("{var} parse error: {e}")))
}

/// Provider timestamps are midnight China time; the calendar date is taken there.
fn date_cell(ms: i64) -> Cell {
    ms_to_shanghai_date(ms).map_or(Cell::Missing, Cell::Date)
}

pub(crate) fn ms_to_shanghai_date(ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.with_timezone(&Shanghai).date_naive())
}
