use crate::core::{Cell, NavError, NavRecord, RawTable};

/// Substrings that identify each logical field in a provider's column names.
///
/// Matching is case-insensitive and follows the table's column order. A column counts as
/// unit NAV only if it carries a unit token and none of the cumulative markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTokens {
    pub date: Vec<String>,
    pub unit_nav: Vec<String>,
    pub cumulative_nav: Vec<String>,
    pub cumulative_marker: Vec<String>,
}

impl Default for ColumnTokens {
    fn default() -> Self {
        fn owned(v: &[&str]) -> Vec<String> {
            v.iter().map(|s| (*s).to_string()).collect()
        }
        Self {
            date: owned(&["日期", "date", "time"]),
            unit_nav: owned(&["单位净值", "净值", "unit nav", "net value"]),
            cumulative_nav: owned(&["累计净值", "cumulative nav", "cumulative net value"]),
            cumulative_marker: owned(&["累计", "cumulative"]),
        }
    }
}

fn contains_any(name: &str, tokens: &[String]) -> bool {
    tokens.iter().any(|t| name.contains(&t.to_lowercase()))
}

impl ColumnTokens {
    pub fn is_date_column(&self, name: &str) -> bool {
        contains_any(&name.to_lowercase(), &self.date)
    }

    pub fn is_unit_nav_column(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        contains_any(&lower, &self.unit_nav) && !contains_any(&lower, &self.cumulative_marker)
    }

    pub fn is_cumulative_nav_column(&self, name: &str) -> bool {
        contains_any(&name.to_lowercase(), &self.cumulative_nav)
    }

    /// Candidate column indices per field, in table order.
    pub fn roles(&self, columns: &[String]) -> ColumnRoles {
        let pick = |pred: &dyn Fn(&str) -> bool| -> Vec<usize> {
            columns
                .iter()
                .enumerate()
                .filter(|(_, c)| pred(c.as_str()))
                .map(|(i, _)| i)
                .collect()
        };
        ColumnRoles {
            date: pick(&|c| self.is_date_column(c)),
            unit_nav: pick(&|c| self.is_unit_nav_column(c)),
            cumulative_nav: pick(&|c| self.is_cumulative_nav_column(c)),
        }
    }

    pub fn has_date_column(&self, table: &RawTable) -> bool {
        table.columns().iter().any(|c| self.is_date_column(c))
    }

    pub fn has_cumulative_column(&self, table: &RawTable) -> bool {
        table.columns().iter().any(|c| self.is_cumulative_nav_column(c))
    }
}

/// Column indices that may hold each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub date: Vec<usize>,
    pub unit_nav: Vec<usize>,
    pub cumulative_nav: Vec<usize>,
}

/// Fields read from one row before acceptance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowValues {
    pub date: Option<String>,
    pub net_value: Option<f64>,
    pub cumulative_net_value: Option<f64>,
}

/// First candidate column that yields a value wins.
fn first_value<T>(row: &[Cell], cols: &[usize], read: impl Fn(&Cell) -> Option<T>) -> Option<T> {
    cols.iter().find_map(|&i| row.get(i).and_then(&read))
}

pub fn extract_row(row: &[Cell], roles: &ColumnRoles) -> RowValues {
    RowValues {
        date: first_value(row, &roles.date, Cell::date_text),
        net_value: first_value(row, &roles.unit_nav, Cell::try_parse),
        cumulative_net_value: first_value(row, &roles.cumulative_nav, Cell::try_parse),
    }
}

/// Fills whichever NAV is missing from the other one.
///
/// Funds that never distributed have identical unit and cumulative values.
pub fn reconcile(net: Option<f64>, cumulative: Option<f64>) -> (Option<f64>, Option<f64>) {
    match (net, cumulative) {
        (Some(n), None) => (Some(n), Some(n)),
        (None, Some(c)) => (Some(c), Some(c)),
        other => other,
    }
}

fn is_usable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Turns extracted row values into a record, or `None` if the row is not acceptable.
pub fn accept(values: RowValues) -> Option<NavRecord> {
    let date = values.date?;
    let (net, cumulative) = reconcile(values.net_value, values.cumulative_net_value);
    match (net, cumulative) {
        (Some(n), Some(c)) if is_usable(n) && is_usable(c) => Some(NavRecord {
            date,
            net_value: n,
            cumulative_net_value: c,
        }),
        _ => None,
    }
}

/// Maps a provider table onto [`NavRecord`]s, keeping the table's row order.
///
/// Rows without a date or without a positive value are dropped. Fails with
/// [`NavError::NoValidRecords`] when nothing survives.
pub fn normalize(table: &RawTable, tokens: &ColumnTokens) -> Result<Vec<NavRecord>, NavError> {
    let roles = tokens.roles(table.columns());

    let records: Vec<NavRecord> = table
        .rows()
        .filter_map(|row| accept(extract_row(row, &roles)))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = table.len(),
        accepted = records.len(),
        "normalized provider table"
    );

    if records.is_empty() {
        return Err(NavError::NoValidRecords);
    }
    Ok(records)
}
