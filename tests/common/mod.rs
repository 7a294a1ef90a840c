#![allow(dead_code)]

use fundnav_rs::{Cell, Indicator, NavError, RawTable, TrendService};
use httpmock::{Method::GET, Mock, MockServer};
use std::sync::Mutex;
use std::{fs, path::Path};
use url::Url;

pub fn fixture(endpoint: &str, code: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{code}.{ext}"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/pingzhongdata/", server.base_url())).unwrap()
}

pub fn mock_script<'a>(server: &'a MockServer, code: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/pingzhongdata/{code}.js"));
        then.status(200)
            .header("content-type", "application/javascript; charset=utf-8")
            .body(fixture("pingzhongdata", code, "js"));
    })
}

pub fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

pub fn num(v: f64) -> Cell {
    Cell::Number(v)
}

/// `净值日期 | 单位净值` table.
pub fn unit_table(rows: &[(&str, f64)]) -> RawTable {
    let mut t = RawTable::new(["净值日期", "单位净值", "日增长率"]);
    for (d, v) in rows {
        t.push_row(vec![text(d), num(*v), Cell::Missing]).unwrap();
    }
    t
}

/// `净值日期 | 累计净值` table.
pub fn cumulative_table(rows: &[(&str, f64)]) -> RawTable {
    let mut t = RawTable::new(["净值日期", "累计净值"]);
    for (d, v) in rows {
        t.push_row(vec![text(d), num(*v)]).unwrap();
    }
    t
}

/// Scripted in-memory provider. `Err` entries become `NavError::Data`.
pub struct FakeService {
    unit: Result<RawTable, String>,
    cumulative: Result<RawTable, String>,
    calls: Mutex<Vec<Indicator>>,
}

impl FakeService {
    pub fn new(unit: Result<RawTable, String>, cumulative: Result<RawTable, String>) -> Self {
        Self {
            unit,
            cumulative,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self::new(Err(msg.to_string()), Err(msg.to_string()))
    }

    pub fn calls(&self) -> Vec<Indicator> {
        self.calls.lock().unwrap().clone()
    }
}

impl TrendService for FakeService {
    fn fetch_trend<'a>(
        &'a self,
        _code: &'a str,
        indicator: Indicator,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<RawTable, NavError>> + Send + 'a>>
    {
        self.calls.lock().unwrap().push(indicator);
        let res = match indicator {
            Indicator::UnitNavTrend => self.unit.clone(),
            Indicator::CumulativeNavTrend => self.cumulative.clone(),
        }
        .map_err(NavError::Data);
        Box::pin(async move { res })
    }
}
