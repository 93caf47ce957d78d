//! Outcome of the one-shot hello request and its classification

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::io::HttpResponse;
use crate::GreeterError;

pub const CONNECTIVITY_MESSAGE: &str = "Unable to connect to server. Please try again later.";
pub const AUTH_FAILURE_MESSAGE: &str = "Authentication failed. Please check the configured API key.";
pub const NOT_FOUND_MESSAGE: &str = "API endpoint not found.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred. Please try again later.";
pub const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable. Please try again later.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Greeting decoded from a successful response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Greeting {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Why the request did not produce a greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "status")]
pub enum FailureCause {
    /// No API key; nothing was sent
    ConfigurationMissing,
    /// No response reached us
    TransportFailure,
    AuthFailure,
    NotFound,
    ServerError(u16),
    OtherHttpError(u16),
    /// 2xx without a usable `message`
    MalformedResponse,
    UnknownFailure,
}

impl FailureCause {
    /// The fixed sentence shown to the user
    pub fn user_message(&self) -> String {
        match self {
            FailureCause::TransportFailure => CONNECTIVITY_MESSAGE.to_string(),
            FailureCause::AuthFailure => AUTH_FAILURE_MESSAGE.to_string(),
            FailureCause::NotFound => NOT_FOUND_MESSAGE.to_string(),
            FailureCause::ServerError(_) => SERVER_ERROR_MESSAGE.to_string(),
            FailureCause::OtherHttpError(status) => {
                format!("Request failed with status {}.", status)
            }
            FailureCause::ConfigurationMissing | FailureCause::MalformedResponse => {
                UNAVAILABLE_MESSAGE.to_string()
            }
            FailureCause::UnknownFailure => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCause::ConfigurationMissing => write!(f, "API key not configured"),
            FailureCause::TransportFailure => write!(f, "no response received"),
            FailureCause::AuthFailure => write!(f, "authentication failed (401)"),
            FailureCause::NotFound => write!(f, "endpoint not found (404)"),
            FailureCause::ServerError(status) => write!(f, "server error ({})", status),
            FailureCause::OtherHttpError(status) => {
                write!(f, "request failed with status {}", status)
            }
            FailureCause::MalformedResponse => write!(f, "invalid response format"),
            FailureCause::UnknownFailure => write!(f, "unknown failure"),
        }
    }
}

/// State of the greeting request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum Outcome {
    Pending,
    Success { greeting: Greeting },
    Failure { cause: FailureCause },
}

impl Outcome {
    pub fn failure(cause: FailureCause) -> Self {
        Outcome::Failure { cause }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }
}

/// Classify the settled transport result into a terminal outcome
pub fn classify(result: crate::Result<HttpResponse>) -> Outcome {
    let response = match result {
        Ok(response) => response,
        Err(GreeterError::Http(_)) | Err(GreeterError::Timeout(_)) => {
            return Outcome::failure(FailureCause::TransportFailure)
        }
        Err(_) => return Outcome::failure(FailureCause::UnknownFailure),
    };

    match response.status {
        200..=299 => match response.body.as_deref().and_then(parse_greeting) {
            Some(greeting) => Outcome::Success { greeting },
            None => Outcome::failure(FailureCause::MalformedResponse),
        },
        401 => Outcome::failure(FailureCause::AuthFailure),
        404 => Outcome::failure(FailureCause::NotFound),
        status if status >= 500 => Outcome::failure(FailureCause::ServerError(status)),
        status => Outcome::failure(FailureCause::OtherHttpError(status)),
    }
}

/// Decode the hello body; requires a non-empty string `message`.
///
/// Optional fields with unexpected types are dropped rather than rejected.
fn parse_greeting(body: &str) -> Option<Greeting> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    let message = object
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())?;

    Some(Greeting {
        message: message.to_string(),
        timestamp: object.get("timestamp").and_then(Value::as_f64),
        status: object
            .get("status")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}
