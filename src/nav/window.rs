use crate::core::NavRecord;

/// Optional inclusive bounds on `YYYY-MM-DD` dates, compared lexically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateWindow {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.start.as_deref().is_none_or(|s| date >= s)
            && self.end.as_deref().is_none_or(|e| date <= e)
    }
}

/// Sorts by date (stable, ascending) and keeps the records inside `window`.
pub fn sort_and_window(mut records: Vec<NavRecord>, window: &DateWindow) -> Vec<NavRecord> {
    records.sort_by(|a, b| a.date.cmp(&b.date));
    records.retain(|r| window.contains(&r.date));
    records
}
