use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failure reported by the login endpoint. It carries a human readable
/// message.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoginError {
    pub message: String,
}

/// Failure reported by the registration endpoint. Its body is an object
/// whose `error` field holds the reason. It stays separate from
/// [`LoginError`] because the upstream payloads differ.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct RegisterError {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("login failed: {0}")]
    Login(LoginError),
    #[error("registration failed: {0}")]
    Register(RegisterError),
    #[error("this method requires an authenticated user")]
    Unauthorized,
    #[error("unexpected response {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl ApiError {
    pub fn new(status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            status,
            body: String::from(body),
        }
    }
}

pub(crate) const WRONG_CREDENTIALS: &str = "Wrong login or password";

impl LoginError {
    pub(crate) fn wrong_credentials() -> Self {
        LoginError {
            message: String::from(WRONG_CREDENTIALS),
        }
    }
}

impl RegisterError {
    /// Reads the `{ "error": ... }` body, falling back to the raw text.
    pub(crate) fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| RegisterError {
            error: String::from(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_error_is_unwrapped_from_body() {
        let err = RegisterError::from_body(r#"{"error": "User with this login already exists"}"#);
        assert_eq!(err.error, "User with this login already exists");

        let err = RegisterError::from_body("Bad Request");
        assert_eq!(err.error, "Bad Request");
    }

    #[test]
    fn login_and_register_errors_display_their_own_field() {
        assert_eq!(LoginError::wrong_credentials().to_string(), WRONG_CREDENTIALS);
        let err = ApiError::Register(RegisterError {
            error: "taken".into(),
        });
        assert_eq!(err.to_string(), "registration failed: taken");
    }
}
