use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats an empty or whitespace-only string as absent.
pub fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

/// Reads a loosely typed JSON value as a float, yielding `0.0` for anything
/// missing or non-numeric. Numeric strings are accepted.
pub fn lenient_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Query {
        #[serde(default, deserialize_with = "deserialize_blank_as_none")]
        contact_num: Option<String>,
    }

    #[test]
    fn test_blank_string_is_none() {
        let q: Query = serde_json::from_value(json!({ "contact_num": "   " })).unwrap();
        assert!(q.contact_num.is_none());

        let q: Query = serde_json::from_value(json!({})).unwrap();
        assert!(q.contact_num.is_none());

        let q: Query = serde_json::from_value(json!({ "contact_num": "555-0100" })).unwrap();
        assert_eq!(q.contact_num.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_lenient_f64() {
        assert_eq!(lenient_f64(Some(&json!(40))), 40.0);
        assert_eq!(lenient_f64(Some(&json!(-2.5))), -2.5);
        assert_eq!(lenient_f64(Some(&json!(" 12.5 "))), 12.5);
        assert_eq!(lenient_f64(Some(&json!("n/a"))), 0.0);
        assert_eq!(lenient_f64(Some(&Value::Null)), 0.0);
        assert_eq!(lenient_f64(Some(&json!([1, 2]))), 0.0);
        assert_eq!(lenient_f64(None), 0.0);
    }
}
