use contracts::system::auth::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use serde_json::Value;

use super::session;
use crate::shared::api::client;
use crate::shared::api::error::mutation_error_message;

pub const MIN_PASSWORD_LEN: usize = 6;

const LOGIN_FIELDS: &[&str] = &["email", "password"];
const REGISTER_FIELDS: &[&str] = &["email", "password", "phone_number", "first_name", "last_name"];
const PASSWORD_FIELDS: &[&str] = &["old_password", "new_password", "confirm_password"];

/// Pull the access token out of whichever shape this deployment answers
/// with: top-level `access`, top-level `token`, or nested `tokens.access`.
pub fn extract_access_token(body: &Value) -> Option<String> {
    body.get("access")
        .and_then(Value::as_str)
        .or_else(|| body.get("token").and_then(Value::as_str))
        .or_else(|| {
            body.get("tokens")
                .and_then(|tokens| tokens.get("access"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}

/// Refresh token from the analogous shapes: `refresh` or `tokens.refresh`.
pub fn extract_refresh_token(body: &Value) -> Option<String> {
    body.get("refresh")
        .and_then(Value::as_str)
        .or_else(|| {
            body.get("tokens")
                .and_then(|tokens| tokens.get("refresh"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}

/// Client-side precondition for a password change. Runs before any network
/// call; a violation raises locally with a specific message.
pub fn validate_new_password(new_password: &str, confirm: &str) -> Result<(), String> {
    if new_password != confirm {
        return Err("New password and confirmation do not match".to_string());
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Login with email and password. A response without an extractable access
/// token is a hard failure even when the server answered 200.
pub async fn login(email: String, password: String) -> Result<(), String> {
    let request = LoginRequest { email, password };
    let body = client::post_value("/accounts/login/", &request)
        .await
        .map_err(|err| {
            mutation_error_message(&err, LOGIN_FIELDS)
                .unwrap_or_else(|| "Login failed".to_string())
        })?;

    let access = extract_access_token(&body)
        .ok_or_else(|| "No access token received".to_string())?;
    session::establish(access, extract_refresh_token(&body));
    log::info!("session established");
    Ok(())
}

/// Register a new member. Returns true when the server also logged the
/// account in (token present); a token-less response is still a success,
/// the member just has to log in manually.
pub async fn register(request: RegisterRequest) -> Result<bool, String> {
    let body = client::post_value("/accounts/register/", &request)
        .await
        .map_err(|err| {
            mutation_error_message(&err, REGISTER_FIELDS)
                .unwrap_or_else(|| "Registration failed".to_string())
        })?;

    match extract_access_token(&body) {
        Some(access) => {
            session::establish(access, extract_refresh_token(&body));
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Change the current password. Goes through the shared client like every
/// other call, so the bearer header and the 401 handling are uniform.
pub async fn change_password(
    old_password: String,
    new_password: String,
    confirm_password: String,
) -> Result<(), String> {
    validate_new_password(&new_password, &confirm_password)?;

    let request = ChangePasswordRequest {
        old_password,
        new_password,
        confirm_password,
    };
    client::post_value("/accounts/change-password/", &request)
        .await
        .map_err(|err| {
            mutation_error_message(&err, PASSWORD_FIELDS)
                .unwrap_or_else(|| "Password change failed".to_string())
        })?;
    Ok(())
}

/// Synchronous: clears both persisted tokens and the in-memory session.
/// No network effect.
pub fn logout() {
    session::invalidate();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn access_token_from_flat_shape() {
        let body = json!({"access": "A", "refresh": "R"});
        assert_eq!(extract_access_token(&body).as_deref(), Some("A"));
        assert_eq!(extract_refresh_token(&body).as_deref(), Some("R"));
    }

    #[test]
    fn access_token_from_token_field() {
        let body = json!({"token": "T"});
        assert_eq!(extract_access_token(&body).as_deref(), Some("T"));
        assert_eq!(extract_refresh_token(&body), None);
    }

    #[test]
    fn access_token_from_nested_tokens() {
        let body = json!({"tokens": {"access": "A", "refresh": "R"}});
        assert_eq!(extract_access_token(&body).as_deref(), Some("A"));
        assert_eq!(extract_refresh_token(&body).as_deref(), Some("R"));
    }

    #[test]
    fn flat_shape_wins_over_nested() {
        let body = json!({"access": "flat", "tokens": {"access": "nested"}});
        assert_eq!(extract_access_token(&body).as_deref(), Some("flat"));
    }

    #[test]
    fn empty_response_has_no_token() {
        assert_eq!(extract_access_token(&json!({})), None);
        assert_eq!(extract_refresh_token(&json!({})), None);
    }

    #[test]
    fn password_below_minimum_length_is_rejected() {
        let err = validate_new_password("abc12", "abc12").unwrap_err();
        assert!(err.contains("at least 6"));
    }

    #[test]
    fn password_mismatch_is_rejected() {
        let err = validate_new_password("abcdef", "xyzxyz").unwrap_err();
        assert!(err.contains("do not match"));
    }

    #[test]
    fn valid_password_passes() {
        assert!(validate_new_password("abcdef", "abcdef").is_ok());
    }
}
