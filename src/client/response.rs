use crate::client::Result;
use reqwest::{header::HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body keys whose presence marks a failed request, even when the status is 2xx
const ERROR_KEYS: [&str; 4] = ["errors", "error_message", "error_code", "status_code"];

/// A response from the monday.com API: status, parsed JSON body and headers.
///
/// The API answers many failed requests (GraphQL validation errors, complexity
/// and rate limits) with `200 OK` and the error in the body, so
/// [`is_success`](Response::is_success) looks at both.
#[derive(Clone, Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl Response {
    /// Wrap raw response parts, failing if the payload is not JSON. An empty
    /// payload becomes `null`.
    pub fn new(status: StatusCode, headers: HeaderMap, payload: &[u8]) -> Result<Self> {
        let body = if payload.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(payload)?
        };

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    pub(super) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let payload = response.bytes().await?;

        Self::new(status, headers, &payload)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|h| h.to_str().ok())
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    /// The `data` member of the body
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data")
    }

    /// Deserialize the `data` member into `T`. A missing `data` member is
    /// treated as `null`.
    pub fn deserialize_data<T: DeserializeOwned>(&self) -> Result<T> {
        let data = self.data().cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// True for a 2xx status with no error keys in the body
    pub fn is_success(&self) -> bool {
        self.status.is_success() && !self.has_error_keys()
    }

    fn has_error_keys(&self) -> bool {
        ERROR_KEYS.iter().any(|key| self.body.get(key).is_some())
    }
}
