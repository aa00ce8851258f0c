use serde_json::Value;

/// Failure of a single API call, before any user-facing wording is applied.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request was aborted, either because a newer request superseded it
    /// or because the caller went away. Not an error from the user's point
    /// of view; hooks drop it without touching their state.
    Cancelled,
    /// The request was sent but no response ever arrived (network failure or
    /// the client-wide timeout).
    NoResponse,
    /// A client-side failure: request serialization or response decoding.
    Client(String),
    /// The server answered with a non-2xx status. `body` is the decoded JSON
    /// error payload when there was one.
    Status {
        status: u16,
        status_text: String,
        body: Option<Value>,
    },
}

pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn first_in_array(value: &Value) -> Option<String> {
    value.as_array()?.first()?.as_str().map(str::to_string)
}

/// Message for a failed read. Probes the payload for `message`, then
/// `error`, then `detail`, and falls back to the HTTP status text.
/// Cancellations produce no message at all.
pub fn fetch_error_message(error: &ApiError) -> Option<String> {
    match error {
        ApiError::Cancelled => None,
        ApiError::NoResponse => Some(NETWORK_ERROR_MESSAGE.to_string()),
        ApiError::Client(message) => Some(message.clone()),
        ApiError::Status {
            status_text, body, ..
        } => {
            let from_body = body.as_ref().and_then(|payload| {
                ["message", "error", "detail"]
                    .iter()
                    .find_map(|key| string_field(payload, key))
            });
            Some(from_body.unwrap_or_else(|| status_text.clone()))
        }
    }
}

/// Message for a failed write. `fields` lists the payload field names the
/// calling form knows about; a per-field error array for one of them wins
/// over everything else.
pub fn mutation_error_message(error: &ApiError, fields: &[&str]) -> Option<String> {
    match error {
        ApiError::Cancelled => None,
        ApiError::NoResponse => Some(NETWORK_ERROR_MESSAGE.to_string()),
        ApiError::Client(message) => Some(message.clone()),
        ApiError::Status {
            status_text, body, ..
        } => Some(status_error_message(status_text, body.as_ref(), fields)),
    }
}

fn status_error_message(status_text: &str, body: Option<&Value>, fields: &[&str]) -> String {
    let Some(body) = body else {
        return format!("Request failed: {}", status_text);
    };

    // 1. Per-field validation array for a recognized field name.
    for field in fields {
        if let Some(message) = body.get(field).and_then(first_in_array) {
            return message;
        }
    }

    // 2. DRF-style non_field_errors.
    if let Some(message) = body.get("non_field_errors").and_then(first_in_array) {
        return message;
    }

    // 3-5. Flat string fields in preference order.
    for key in ["detail", "message", "error"] {
        if let Some(message) = string_field(body, key) {
            return message;
        }
    }

    // 6. Any remaining object shape: join field -> first message pairs.
    if let Some(map) = body.as_object() {
        let mut parts = Vec::new();
        for (name, value) in map {
            if let Some(first) = first_in_array(value) {
                parts.push(format!("{}: {}", name, first));
            } else if let Some(text) = value.as_str() {
                parts.push(format!("{}: {}", name, text));
            }
        }
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    // 7. A bare string payload.
    if let Some(text) = body.as_str() {
        return text.to_string();
    }

    format!("Request failed: {}", status_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(body: Option<Value>) -> ApiError {
        ApiError::Status {
            status: 400,
            status_text: "Bad Request".to_string(),
            body,
        }
    }

    #[test]
    fn recognized_field_array_wins() {
        let err = status(Some(json!({"phone_number": ["too short"]})));
        assert_eq!(
            mutation_error_message(&err, &["phone_number"]).unwrap(),
            "too short"
        );
    }

    #[test]
    fn unrecognized_field_falls_through_to_flatten() {
        let err = status(Some(json!({"national_id": ["invalid format"]})));
        assert_eq!(
            mutation_error_message(&err, &["phone_number"]).unwrap(),
            "national_id: invalid format"
        );
    }

    #[test]
    fn non_field_errors_beat_detail() {
        let err = status(Some(json!({
            "non_field_errors": ["account locked"],
            "detail": "something else"
        })));
        assert_eq!(mutation_error_message(&err, &[]).unwrap(), "account locked");
    }

    #[test]
    fn detail_then_message_then_error() {
        let err = status(Some(json!({"detail": "not found"})));
        assert_eq!(mutation_error_message(&err, &[]).unwrap(), "not found");

        let err = status(Some(json!({"message": "bad input"})));
        assert_eq!(mutation_error_message(&err, &[]).unwrap(), "bad input");

        let err = status(Some(json!({"error": "rejected"})));
        assert_eq!(mutation_error_message(&err, &[]).unwrap(), "rejected");
    }

    #[test]
    fn flattened_join_of_multiple_fields() {
        let err = status(Some(json!({"amount": ["must be positive"]})));
        assert_eq!(
            mutation_error_message(&err, &[]).unwrap(),
            "amount: must be positive"
        );
    }

    #[test]
    fn literal_string_payload() {
        let err = status(Some(json!("plain failure")));
        assert_eq!(mutation_error_message(&err, &[]).unwrap(), "plain failure");
    }

    #[test]
    fn status_text_fallback_without_body() {
        let err = status(None);
        assert_eq!(
            mutation_error_message(&err, &[]).unwrap(),
            "Request failed: Bad Request"
        );
    }

    #[test]
    fn status_text_fallback_for_unusable_body() {
        let err = status(Some(json!(42)));
        assert_eq!(
            mutation_error_message(&err, &[]).unwrap(),
            "Request failed: Bad Request"
        );
    }

    #[test]
    fn network_failure_is_generic() {
        assert_eq!(
            mutation_error_message(&ApiError::NoResponse, &[]).unwrap(),
            NETWORK_ERROR_MESSAGE
        );
        assert_eq!(
            fetch_error_message(&ApiError::NoResponse).unwrap(),
            NETWORK_ERROR_MESSAGE
        );
    }

    #[test]
    fn cancellation_has_no_message() {
        assert!(mutation_error_message(&ApiError::Cancelled, &[]).is_none());
        assert!(fetch_error_message(&ApiError::Cancelled).is_none());
    }

    #[test]
    fn fetch_prefers_message_then_error_then_detail() {
        let err = status(Some(json!({"message": "m", "error": "e", "detail": "d"})));
        assert_eq!(fetch_error_message(&err).unwrap(), "m");

        let err = status(Some(json!({"error": "e", "detail": "d"})));
        assert_eq!(fetch_error_message(&err).unwrap(), "e");

        let err = status(Some(json!({"detail": "d"})));
        assert_eq!(fetch_error_message(&err).unwrap(), "d");

        let err = status(Some(json!({})));
        assert_eq!(fetch_error_message(&err).unwrap(), "Bad Request");
    }

    #[test]
    fn client_side_message_passes_through() {
        let err = ApiError::Client("unexpected token".to_string());
        assert_eq!(fetch_error_message(&err).unwrap(), "unexpected token");
        assert_eq!(mutation_error_message(&err, &[]).unwrap(), "unexpected token");
    }
}
