//! Fact wire type.

use serde::{Deserialize, Deserializer, Serialize};

/// A single fact as returned by the fact service.
///
/// The body of `GET /fact` looks like `{"fact": "...", "length": 30}`. Only
/// `fact` is required; `length` is informational and never fails a decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// The fact text
    pub fact: String,
    /// Character count reported by the service, when it is a usable number
    #[serde(default, deserialize_with = "lenient_length")]
    pub length: Option<u64>,
}

/// Accept any JSON value for `length`; keep it only if it is a non-negative
/// whole number (`10` or `10.0`).
fn lenient_length<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fact() {
        let json = r#"{"fact":"Cats sleep 70% of their lives.","length":30}"#;
        let fact: Fact = serde_json::from_str(json).unwrap();
        assert_eq!(fact.fact, "Cats sleep 70% of their lives.");
        assert_eq!(fact.length, Some(30));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"fact":"A group of cats is a clowder.","length":29,"source":"x"}"#;
        let fact: Fact = serde_json::from_str(json).unwrap();
        assert_eq!(fact.fact, "A group of cats is a clowder.");
    }

    #[test]
    fn test_deserialize_without_length() {
        let fact: Fact = serde_json::from_str(r#"{"fact":"Cats purr."}"#).unwrap();
        assert_eq!(fact.fact, "Cats purr.");
        assert_eq!(fact.length, None);
    }

    #[test]
    fn test_deserialize_tolerates_odd_length() {
        let float: Fact = serde_json::from_str(r#"{"fact":"Cats purr.","length":10.0}"#).unwrap();
        assert_eq!(float.length, Some(10));

        for length in ["10.5", "-3", "\"ten\"", "null", "[1]"] {
            let json = format!(r#"{{"fact":"Cats purr.","length":{}}}"#, length);
            let fact: Fact = serde_json::from_str(&json).unwrap();
            assert_eq!(fact.fact, "Cats purr.", "length {}", length);
            assert_eq!(fact.length, None, "length {}", length);
        }
    }

    #[test]
    fn test_deserialize_missing_fact_fails() {
        let json = r#"{"length":12}"#;
        assert!(serde_json::from_str::<Fact>(json).is_err());
    }
}
