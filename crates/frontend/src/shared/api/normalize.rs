use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a list response that is either a bare JSON array or a paginated
/// envelope with the rows under `results`.
///
/// Any other shape degrades to an empty list; a shape mismatch is never a
/// hard failure. Rows that fail to decode are dropped individually.
pub fn normalize_collection<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(rows)) => rows,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    rows.into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_passes_through() {
        let rows: Vec<Value> = normalize_collection(json!([{"id": 1}, {"id": 2}]));
        assert_eq!(rows, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn envelope_results_are_unwrapped() {
        let rows: Vec<Value> =
            normalize_collection(json!({"count": 2, "results": [{"id": 1}, {"id": 2}]}));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], json!({"id": 1}));
    }

    #[test]
    fn other_shapes_degrade_to_empty() {
        let rows: Vec<Value> = normalize_collection(json!({"id": 1}));
        assert!(rows.is_empty());

        let rows: Vec<Value> = normalize_collection(json!("nope"));
        assert!(rows.is_empty());

        let rows: Vec<Value> = normalize_collection(json!({"results": "nope"}));
        assert!(rows.is_empty());

        let rows: Vec<Value> = normalize_collection(Value::Null);
        assert!(rows.is_empty());
    }

    #[test]
    fn undecodable_rows_are_dropped() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            id: i64,
        }
        let rows: Vec<Row> = normalize_collection(json!([{"id": 1}, {"id": "x"}, {"id": 3}]));
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 3 }]);
    }
}
