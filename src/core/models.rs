use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::NavError;

/* ----- OUTPUT RECORD (shared by nav/ and cli/) ----- */

/// One normalized net-asset-value observation.
///
/// Both values are strictly positive once a record has been accepted by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavRecord {
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Unit net value.
    pub net_value: f64,
    /// Cumulative net value, including past distributions.
    pub cumulative_net_value: f64,
}

/* ----- RAW PROVIDER TABLE ----- */

/// A single scalar in a [`RawTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Cell {
    /// Builds a number cell, mapping NaN to [`Cell::Missing`].
    pub fn number(v: Option<f64>) -> Self {
        match v {
            Some(n) if !n.is_nan() => Cell::Number(n),
            _ => Cell::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Renders the cell the way a date column is read: text up to the first whitespace.
    ///
    /// Missing and blank cells yield `None`.
    pub fn date_text(&self) -> Option<String> {
        let full = match self {
            Cell::Missing => return None,
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.is_nan() => return None,
            // integral values keep their `.0`, e.g. `20230101.0`
            Cell::Number(n) => format!("{n:?}"),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        full.split_whitespace().next().map(str::to_string)
    }

    /// Best-effort numeric reading. Failures are `None`, never errors.
    pub fn try_parse(&self) -> Option<f64> {
        let v = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Missing | Cell::Date(_) | Cell::DateTime(_) => return None,
        };
        if v.is_nan() { None } else { Some(v) }
    }
}

/// Rows of provider data under source-defined column names.
///
/// Column names are kept exactly as the provider produced them; every row has one cell per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. The row must have exactly one cell per column.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), NavError> {
        if row.len() != self.columns.len() {
            return Err(NavError::Data(format!(
                "row has {} cells but table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builder-style variant of [`RawTable::push_row`].
    pub fn with_row(mut self, row: Vec<Cell>) -> Result<Self, NavError> {
        self.push_row(row)?;
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `(row, col)`, or `None` when either index is out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/* ----- PROVIDER QUERY VARIANTS ----- */

/// The trend series a provider can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Unit net value over the fund's whole history.
    UnitNavTrend,
    /// Cumulative net value over the fund's whole history.
    CumulativeNavTrend,
}

impl Indicator {
    /// Order in which the fetcher tries the variants.
    pub const PRIORITY: [Indicator; 2] = [Indicator::UnitNavTrend, Indicator::CumulativeNavTrend];

    /// Provider-facing name of the series.
    pub fn as_str(self) -> &'static str {
        match self {
            Indicator::UnitNavTrend => "单位净值走势",
            Indicator::CumulativeNavTrend => "累计净值走势",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
