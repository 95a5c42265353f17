//! Query-string flattening for filters and paging.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Flattens a serializable parameter object into query pairs.
///
/// - `null` and empty strings are dropped (an empty form field means "no
///   filter", never "filter for empty").
/// - Arrays emit one pair per element under the same key.
/// - Booleans and numbers use their JSON rendering; nested objects are sent
///   as compact JSON.
///
/// Keys are emitted in lexicographic order.
pub fn to_query_pairs<T: Serialize>(params: &T) -> ClientResult<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    match serde_json::to_value(params)? {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                push_value(&mut pairs, &key, value);
            }
        }
        other => {
            return Err(ClientError::Config(format!(
                "query parameters must serialize to an object, got {other}"
            )));
        }
    }
    Ok(pairs)
}

fn push_value(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) if s.is_empty() => {}
        Value::String(s) => pairs.push((key.to_string(), s)),
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::Array(items) => {
            for item in items {
                push_value(pairs, key, item);
            }
        }
        object @ Value::Object(_) => pairs.push((key.to_string(), object.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_emitted_once() {
        let pairs = to_query_pairs(&json!({"year": 2024, "active": true, "q": "x"})).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("active".to_string(), "true".to_string()),
                ("q".to_string(), "x".to_string()),
                ("year".to_string(), "2024".to_string()),
            ]
        );
    }

    #[test]
    fn arrays_repeat_the_key() {
        let pairs = to_query_pairs(&json!({"status": ["PENDING", "APPROVED"]})).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("status".to_string(), "PENDING".to_string()),
                ("status".to_string(), "APPROVED".to_string()),
            ]
        );
    }

    #[test]
    fn nulls_and_empty_strings_are_absent() {
        let pairs = to_query_pairs(&json!({"query": "", "userId": null})).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn unit_params_yield_nothing() {
        assert!(to_query_pairs(&()).unwrap().is_empty());
    }

    #[test]
    fn non_object_params_are_rejected() {
        assert!(to_query_pairs(&vec![1, 2]).is_err());
    }
}
