use serde::{de::Error as _, Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "https://api.monday.com/v2";
const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error")]
    Io(#[from] io::Error),
    #[error("toml parsing error")]
    De(#[from] toml::de::Error),
}

/// Settings used to build a [`Client`](crate::Client).
///
/// Every field is optional in a config file; missing ones take the defaults.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// API token, sent verbatim in the `Authorization` header
    pub token: Option<String>,

    /// GraphQL endpoint
    pub host: String,

    /// Sent as the `API-Version` header when set, e.g. `2024-01`
    pub version: Option<String>,

    /// Connect timeout, written in seconds in a config file (`0.5` is allowed)
    #[serde(deserialize_with = "seconds")]
    pub open_timeout: Duration,

    /// Request timeout, written in seconds in a config file
    #[serde(deserialize_with = "seconds")]
    pub read_timeout: Duration,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn open_timeout(&self) -> Duration {
        self.open_timeout
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            host: DEFAULT_HOST.to_owned(),
            version: None,
            open_timeout: DEFAULT_OPEN_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(D::Error::custom("timeout must be a non-negative number of seconds"));
    }
    Ok(Duration::from_secs_f64(secs))
}

// Keep the token out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("version", &self.version)
            .field("open_timeout", &self.open_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}
