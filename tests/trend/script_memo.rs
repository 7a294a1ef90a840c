use std::time::Duration;

use fundnav_rs::{FundClient, Indicator, NavHistoryBuilder, TrendService};
use httpmock::{Method::GET, MockServer};

use crate::common::{base_url, fixture, mock_script};

#[tokio::test]
async fn zero_ttl_fetches_script_per_series() {
    let server = MockServer::start();
    let mock = mock_script(&server, "000001");

    let client = FundClient::builder()
        .base_url(base_url(&server))
        .script_ttl(Duration::ZERO)
        .build()
        .unwrap();

    let recs = NavHistoryBuilder::new(&client, "000001")
        .fetch()
        .await
        .unwrap();

    mock.assert_hits(2);
    assert_eq!(recs.len(), 5);
}

#[tokio::test]
async fn memo_is_keyed_by_fund_code() {
    let server = MockServer::start();
    let first = mock_script(&server, "000001");
    let second = server.mock(|when, then| {
        when.method(GET).path("/pingzhongdata/000002.js");
        then.status(200)
            .body(fixture("pingzhongdata", "000001", "js"));
    });

    let client = FundClient::builder()
        .base_url(base_url(&server))
        .build()
        .unwrap();

    for code in ["000001", "000002", "000001"] {
        client
            .fetch_trend(code, Indicator::UnitNavTrend)
            .await
            .unwrap();
    }

    // only the most recent code is kept
    first.assert_hits(2);
    second.assert_hits(1);
}

#[tokio::test]
async fn clones_share_the_memo() {
    let server = MockServer::start();
    let mock = mock_script(&server, "000001");

    let client = FundClient::builder()
        .base_url(base_url(&server))
        .build()
        .unwrap();
    let other = client.clone();

    client
        .fetch_trend("000001", Indicator::UnitNavTrend)
        .await
        .unwrap();
    other
        .fetch_trend("000001", Indicator::CumulativeNavTrend)
        .await
        .unwrap();

    mock.assert_hits(1);
}

#[tokio::test]
async fn expired_entry_is_fetched_again() {
    let server = MockServer::start();
    let mock = mock_script(&server, "000001");

    let client = FundClient::builder()
        .base_url(base_url(&server))
        .script_ttl(Duration::from_millis(20))
        .build()
        .unwrap();

    client
        .fetch_trend("000001", Indicator::UnitNavTrend)
        .await
        .unwrap();
    std::thread::sleep(Duration::from_millis(60));
    client
        .fetch_trend("000001", Indicator::UnitNavTrend)
        .await
        .unwrap();

    mock.assert_hits(2);
}
