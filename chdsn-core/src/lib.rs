//! DSN codec for HTTP analytical database clients.
//!
//! This crate converts between connection strings of the form
//!
//! ```text
//! scheme://[user[:password]@]host[:port]/[database][?key=value&...]
//! ```
//!
//! and a typed [`Config`]. It performs no network I/O; the resulting
//! configuration is handed to whatever client opens the connection.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use chdsn_core::{Config, parse_dsn};
//!
//! let config = parse_dsn("https://reader@db.internal:8443/events?read_timeout=30s")?;
//! assert_eq!(config.read_timeout, Duration::from_secs(30));
//!
//! let config = config.write_timeout(Duration::from_secs(10));
//! assert_eq!(
//!     config.format_dsn(),
//!     "https://reader@db.internal:8443/events?read_timeout=30s&write_timeout=10s"
//! );
//! # Ok::<(), chdsn_core::DsnError>(())
//! ```

pub mod config;
pub mod dsn;
pub mod error;
pub mod logging;
pub mod value;

pub use chrono_tz::Tz;
pub use config::{Config, DEFAULT_HOST, DEFAULT_IDLE_TIMEOUT, DEFAULT_SCHEME, RESERVED_KEYS};
pub use dsn::parse_dsn;
pub use error::{DsnError, DsnResult};
