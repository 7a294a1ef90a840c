use serde::{Deserialize, Deserializer};

/// One point of `Data_netWorthTrend`.
#[derive(Deserialize)]
pub(crate) struct NetWorthPoint {
    /// Epoch milliseconds.
    pub(crate) x: i64,
    #[serde(default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) y: Option<f64>,
    #[serde(default, rename = "equityReturn", deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) equity_return: Option<f64>,
}

/// One `[ms, value]` pair of `Data_ACWorthTrend`.
#[derive(Deserialize)]
pub(crate) struct AcWorthPoint(
    pub(crate) i64,
    #[serde(deserialize_with = "de_opt_f64_from_mixed")] pub(crate) Option<f64>,
);

/// Returns the `[...]` literal assigned to `var <name>` in a provider script.
pub(crate) fn extract_js_array<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("var {name}");
    let mut pos = 0usize;

    while let Some(found) = body[pos..].find(&needle) {
        let after = pos + found + needle.len();
        let rest = &body[after..];
        let trimmed = rest.trim_start();
        // `Data_netWorthTrendX` is a different variable
        if let Some(value) = trimmed.strip_prefix('=') {
            let value = value.trim_start();
            if value.starts_with('[') {
                let start = body.len() - value.len();
                let end = find_matching_bracket(body, start)?;
                return Some(&body[start..=end]);
            }
        }
        pos = after;
    }
    None
}

fn find_matching_bracket(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.get(start).copied()? != b'[' {
        return None;
    }

    let mut depth = 0usize;
    let mut in_str = false;
    let mut j = start;

    while j < bytes.len() {
        let c = bytes[j];

        if in_str {
            if c == b'\\' {
                j += 2;
                continue;
            } else if c == b'"' {
                in_str = false;
            }
            j += 1;
            continue;
        }

        match c {
            b'"' => in_str = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// Accepts numbers, numeric strings, empty strings, or null/missing.
/// Anything unparseable becomes `None` rather than an error.
fn de_opt_f64_from_mixed<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
