use fundnav_rs::NavError;
use fundnav_rs::NavRecord;
use fundnav_rs::cli::Envelope;
use serde_json::{Value, json};

#[test]
fn success_envelope_has_exact_record_fields() {
    let env = Envelope::success(vec![NavRecord {
        date: "2023-01-03".into(),
        net_value: 1.5,
        cumulative_net_value: 2.25,
    }]);

    let v: Value = serde_json::from_str(&env.to_json().unwrap()).unwrap();
    assert_eq!(
        v,
        json!({
            "success": true,
            "data": [{"date": "2023-01-03", "netValue": 1.5, "cumulativeNetValue": 2.25}]
        })
    );
    assert_eq!(env.status(), 0);
}

#[test]
fn failure_envelope_carries_the_message() {
    let env = Envelope::failure(&NavError::NoValidRecords);

    let v: Value = serde_json::from_str(&env.to_json().unwrap()).unwrap();
    assert_eq!(v["success"], json!(false));
    assert_eq!(v["error"], json!(NavError::NoValidRecords.to_string()));
    assert_eq!(env.status(), 1);
}

#[test]
fn missing_argument_envelope_has_no_success_key() {
    let env = Envelope::failure(&NavError::MissingArgument);

    let v: Value = serde_json::from_str(&env.to_json().unwrap()).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert!(obj.contains_key("error"));
    assert!(!obj.contains_key("success"));
    assert_eq!(env.status(), 1);
}

#[test]
fn non_ascii_is_written_unescaped() {
    let env = Envelope::failure(&NavError::Data("基金代码无效".into()));
    let json = env.to_json().unwrap();
    assert!(json.contains("基金代码无效"), "{json}");
    assert!(!json.contains("\\u"), "{json}");
}
