use crate::core::{Indicator, NavError, RawTable, TrendService};
use crate::nav::{ColumnTokens, merge};

/// Tries each [`Indicator`] in priority order and returns the first non-empty table.
///
/// With `merge_cumulative` set, a unit-NAV table that has no cumulative column is joined
/// with the cumulative-NAV series; if that step fails the unit table is returned as is.
pub(crate) async fn fetch_table(
    service: &dyn TrendService,
    code: &str,
    merge_cumulative: bool,
    tokens: &ColumnTokens,
) -> Result<RawTable, NavError> {
    let mut last_error: Option<NavError> = None;

    for indicator in Indicator::PRIORITY {
        match service.fetch_trend(code, indicator).await {
            Ok(table) if !table.is_empty() => {
                if merge_cumulative
                    && indicator == Indicator::UnitNavTrend
                    && !tokens.has_cumulative_column(&table)
                {
                    return Ok(merge_cumulative_into(service, code, table, tokens).await);
                }
                return Ok(table);
            }
            Ok(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(code, %indicator, "provider returned an empty table");
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(code, %indicator, error = %e, "trend variant failed");
                last_error = Some(e);
            }
        }
    }

    Err(NavError::NoDataAvailable {
        code: code.to_string(),
        last_error: last_error.map(|e| e.to_string()),
    })
}

async fn merge_cumulative_into(
    service: &dyn TrendService,
    code: &str,
    unit: RawTable,
    tokens: &ColumnTokens,
) -> RawTable {
    let merged = match service.fetch_trend(code, Indicator::CumulativeNavTrend).await {
        Ok(cumulative) if !cumulative.is_empty() => {
            merge::outer_join_on_date(&unit, &cumulative, tokens)
        }
        Ok(_) => Err(NavError::Data("cumulative series is empty".into())),
        Err(e) => Err(e),
    };

    match merged {
        Ok(table) => table,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(code, error = %_e, "cumulative merge skipped; using unit series only");
            unit
        }
    }
}
