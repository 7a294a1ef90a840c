use fundnav_rs::{FundClient, NavHistoryBuilder};

use crate::common::{base_url, mock_script};
use httpmock::MockServer;

#[tokio::test]
async fn offline_history_merges_both_series_from_fixture() {
    let server = MockServer::start();
    let mock = mock_script(&server, "000001");

    let client = FundClient::builder()
        .base_url(base_url(&server))
        .build()
        .unwrap();

    let recs = NavHistoryBuilder::new(&client, "000001")
        .fetch()
        .await
        .unwrap();

    // both series come from the same script
    mock.assert_hits(1);

    let got: Vec<(&str, f64, f64)> = recs
        .iter()
        .map(|r| (r.date.as_str(), r.net_value, r.cumulative_net_value))
        .collect();
    assert_eq!(
        got,
        [
            ("2024-01-02", 1.234, 3.512),
            ("2024-01-03", 1.229, 3.507),
            ("2024-01-04", 1.241, 3.519),
            ("2024-01-05", 3.52, 3.52),
            ("2024-01-08", 3.53, 3.53),
        ]
    );
}

#[tokio::test]
async fn offline_history_without_merge_uses_unit_series_only() {
    let server = MockServer::start();
    let mock = mock_script(&server, "000001");

    let client = FundClient::builder()
        .base_url(base_url(&server))
        .build()
        .unwrap();

    let recs = NavHistoryBuilder::new(&client, "000001")
        .merge_cumulative(false)
        .between("2024-01-03", "2024-01-31")
        .fetch()
        .await
        .unwrap();

    mock.assert_hits(1);
    let dates: Vec<&str> = recs.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-03", "2024-01-04"]);
    assert!(recs.iter().all(|r| r.net_value == r.cumulative_net_value));
}
