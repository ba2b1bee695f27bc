//! Error types for the monday.com client

use crate::{client::Response, config::ConfigError};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::{borrow::Cow, convert::TryFrom, fmt, io};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Io error")]
    Io(#[from] io::Error),

    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("config error")]
    Config(#[from] ConfigError),

    #[error("url error")]
    Url(#[from] url::ParseError),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    #[error("{0}")]
    Api(#[from] ApiError),
}

impl Error {
    /// The classified API error, if this is one
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

/// The kinds of failure the API reports. They all share the contract of
/// [`ApiError`]; the kind is the only difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Generic,
    Authorization,
    InvalidRequest,
    ResourceNotFound,
    RateLimit,
    InternalServer,
    Complexity,
}

impl ErrorKind {
    /// Kind for a non-2xx HTTP status
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorKind::Authorization,
            404 => ErrorKind::ResourceNotFound,
            429 => ErrorKind::RateLimit,
            500 => ErrorKind::InternalServer,
            _ => ErrorKind::Generic,
        }
    }

    /// Kind and numeric code for an error code found in a response body
    pub fn from_error_code(code: &str) -> Option<(Self, u16)> {
        let mapped = match code {
            "ComplexityException" | "COMPLEXITY_BUDGET_EXHAUSTED" | "maxComplexityExceeded" => {
                (ErrorKind::Complexity, 429)
            }
            "UserUnauthorizedException" | "USER_UNAUTHORIZED" | "Unauthorized" => {
                (ErrorKind::Authorization, 403)
            }
            "ResourceNotFoundException" => (ErrorKind::ResourceNotFound, 404),
            "RATE_LIMIT_EXCEEDED"
            | "DAILY_LIMIT_EXCEEDED"
            | "CONCURRENCY_LIMIT_EXCEEDED"
            | "IP_RATE_LIMIT_EXCEEDED"
            | "FIELD_MINUTE_RATE_LIMIT_EXCEEDED" => (ErrorKind::RateLimit, 429),
            "InternalServerError" => (ErrorKind::InternalServer, 500),
            "CreateBoardException"
            | "ItemsLimitationException"
            | "ItemNameTooLongException"
            | "ColumnValueException"
            | "CorrectedValueException"
            | "RecordInvalidException"
            | "JsonParseException" => (ErrorKind::InvalidRequest, 400),
            // InvalidBoardIdException, InvalidColumnIdException, ...
            code if code.starts_with("Invalid") && code.ends_with("Exception") => {
                (ErrorKind::InvalidRequest, 400)
            }
            _ => return None,
        };

        Some(mapped)
    }

    fn description(self) -> &'static str {
        match self {
            ErrorKind::Generic => "error",
            ErrorKind::Authorization => "authorization error",
            ErrorKind::InvalidRequest => "invalid request",
            ErrorKind::ResourceNotFound => "resource not found",
            ErrorKind::RateLimit => "rate limit exceeded",
            ErrorKind::InternalServer => "internal server error",
            ErrorKind::Complexity => "complexity budget exceeded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// Code used when the body names an error code we don't recognise
const UNKNOWN_ERROR_CODE: u16 = 400;

/// A failed request, classified from the HTTP status or the error payload in
/// the body.
#[derive(Clone, Debug)]
pub struct ApiError {
    kind: ErrorKind,
    code: u16,
    message: Option<String>,
    response: Response,
}

impl ApiError {
    pub fn new(kind: ErrorKind, code: u16, message: Option<String>, response: Response) -> Self {
        Self {
            kind,
            code,
            message,
            response,
        }
    }

    /// Classify a response that did not succeed.
    ///
    /// A non-2xx status is mapped from the status alone. Otherwise the error
    /// code is looked up in the body (`error_code`, then the first GraphQL
    /// error's `extensions.code` or `extensions.error_code`). Classification
    /// always produces an error, falling back to [`ErrorKind::Generic`].
    pub fn from_response(response: Response) -> Self {
        let status = response.status();

        if !status.is_success() {
            let code = status.as_u16();
            let message = error_message(None, response.body());
            return Self::new(ErrorKind::from_status(code), code, message, response);
        }

        if let Some(error_code) = error_code(response.body()) {
            let (kind, code) = ErrorKind::from_error_code(error_code)
                .unwrap_or((ErrorKind::Generic, UNKNOWN_ERROR_CODE));
            let message = error_message(Some(error_code), response.body());
            return Self::new(kind, code, message, response);
        }

        let message = error_message(None, response.body());

        // Some payloads only carry the status they would have had
        if let Some(code) = body_status_code(response.body()) {
            return Self::new(ErrorKind::from_status(code), code, message, response);
        }

        Self::new(ErrorKind::Generic, status.as_u16(), message, response)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status, or the code mapped from the API's error code
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Human readable message, empty when the API gave none
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    /// `error_data` from the body, e.g. which id was invalid. Empty when absent.
    pub fn error_data(&self) -> Map<String, Value> {
        self.response
            .body()
            .get("error_data")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) if !message.is_empty() => f.write_str(message),
            _ => write!(f, "{} ({})", self.kind, self.code),
        }
    }
}

impl std::error::Error for ApiError {}

fn error_code(body: &Value) -> Option<&str> {
    if let Some(code) = body.get("error_code").and_then(Value::as_str) {
        return Some(code);
    }

    let extensions = body
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|error| error.get("extensions"))?;

    extensions
        .get("code")
        .and_then(Value::as_str)
        .or_else(|| extensions.get("error_code").and_then(Value::as_str))
}

fn body_status_code(body: &Value) -> Option<u16> {
    body.get("status_code")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|code| !code.is_success())
        .map(|code| code.as_u16())
}

// `<qualifier>: <detail>`, where the detail is `error_message` or else the raw
// `errors` array.
fn error_message(qualifier: Option<&str>, body: &Value) -> Option<String> {
    let detail = match body.get("error_message") {
        Some(Value::String(message)) => Some(message.clone()),
        Some(Value::Null) | None => body.get("errors").map(Value::to_string),
        Some(other) => Some(other.to_string()),
    };

    match (qualifier, detail) {
        (Some(qualifier), Some(detail)) => Some(format!("{}: {}", qualifier, detail)),
        (Some(qualifier), None) => Some(qualifier.to_owned()),
        (None, detail) => detail,
    }
}
