//! Connection configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DsnError, DsnResult};

/// Default transport scheme.
pub const DEFAULT_SCHEME: &str = "http";

/// Default server address.
pub const DEFAULT_HOST: &str = "localhost:8123";

/// Default idle timeout for pooled connections.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Query keys that map to typed fields or are rejected outright.
///
/// None of these may appear in [`Config::params`].
pub const RESERVED_KEYS: &[&str] = &[
    "timeout",
    "idle_timeout",
    "read_timeout",
    "write_timeout",
    "location",
    "debug",
    "database",
    "query",
    "default_format",
];

/// Connection settings for an HTTP analytical database server.
///
/// Durations use [`Duration::ZERO`] for "unset". The one exception is
/// `idle_timeout`, which defaults to [`DEFAULT_IDLE_TIMEOUT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Username; empty means anonymous.
    pub user: String,
    /// Password; ignored unless `user` is set.
    pub password: String,
    /// Transport scheme, e.g. `http` or `https`.
    pub scheme: String,
    /// Server address as `host:port`.
    pub host: String,
    /// Database name; empty means the server default.
    pub database: String,
    /// Connection timeout.
    pub timeout: Duration,
    /// Idle timeout for pooled connections.
    pub idle_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// Write timeout.
    pub write_timeout: Duration,
    /// Timezone used to interpret server timestamps.
    pub location: Tz,
    /// Enable driver debug output.
    pub debug: bool,
    /// Passthrough settings forwarded to the server untouched.
    pub params: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: String::new(),
            password: String::new(),
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            database: String::new(),
            timeout: Duration::ZERO,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            read_timeout: Duration::ZERO,
            write_timeout: Duration::ZERO,
            location: Tz::UTC,
            debug: false,
            params: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a DSN into configuration.
    ///
    /// See [`parse_dsn`](crate::parse_dsn) for the accepted format.
    pub fn from_dsn(dsn: impl AsRef<str>) -> DsnResult<Self> {
        crate::dsn::parse_dsn(dsn.as_ref())
    }

    /// Check that no passthrough parameter shadows a reserved key.
    ///
    /// Parsing never produces such a configuration, but direct field
    /// assignment can.
    pub fn validate(&self) -> DsnResult<()> {
        match self
            .params
            .keys()
            .find(|key| RESERVED_KEYS.contains(&key.as_str()))
        {
            Some(key) => Err(DsnError::reserved_param(key.as_str())),
            None => Ok(()),
        }
    }

    /// Check whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty()
    }

    /// Set the transport scheme.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the server address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the username.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the connection timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the idle timeout.
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the write timeout.
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Set the timezone.
    pub fn location(mut self, location: Tz) -> Self {
        self.location = location;
        self
    }

    /// Enable or disable debug output.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Add a passthrough parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl FromStr for Config {
    type Err = DsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dsn(s)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_dsn())
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format_dsn())
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dsn = String::deserialize(deserializer)?;
        Self::from_dsn(&dsn).map_err(serde::de::Error::custom)
    }
}
