//! Logging setup for chdsn.
//!
//! The codec emits `tracing` events (`debug` for each parsed or formatted
//! DSN, `trace` per query option, `warn` when a passthrough parameter
//! shadows a typed option). Nothing is printed unless a subscriber is
//! installed, either by the application or by [`init`].
//!
//! # Environment Variables
//!
//! - `CHDSN_DEBUG=true` or `CHDSN_DEBUG=1` - Enable debug logging
//! - `CHDSN_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `CHDSN_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! [`init`] installs a subscriber only when the `tracing-subscriber` feature
//! is enabled.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `CHDSN_DEBUG`.
///
/// Returns `true` if `CHDSN_DEBUG` is set to "true", "1", or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("CHDSN_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `CHDSN_LOG_LEVEL`.
///
/// Defaults to "debug" if `CHDSN_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };
    match env::var("CHDSN_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// Get the configured log format from `CHDSN_LOG_FORMAT`.
///
/// Defaults to "json".
pub fn get_log_format() -> &'static str {
    env::var("CHDSN_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging from the environment.
///
/// Subsequent calls are no-ops. Does nothing unless `CHDSN_DEBUG` or
/// `CHDSN_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("CHDSN_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "chdsn={},chdsn_core={},chdsn_cli={}",
                level, level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let result = match get_log_format() {
                "json" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .try_init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .try_init(),
            };

            // Another subscriber may already be installed by the host application.
            if result.is_ok() {
                tracing::info!(level = level, format = get_log_format(), "chdsn logging initialized");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_level_defaults() {
        // SAFETY: the only test touching these variables.
        unsafe {
            env::remove_var("CHDSN_DEBUG");
            env::remove_var("CHDSN_LOG_LEVEL");
            env::remove_var("CHDSN_LOG_FORMAT");
        }
        assert!(!is_debug_enabled());
        assert_eq!(get_log_level(), "warn");
        assert_eq!(get_log_format(), "json");

        // SAFETY: see above.
        unsafe {
            env::set_var("CHDSN_DEBUG", "YES");
        }
        assert!(is_debug_enabled());
        assert_eq!(get_log_level(), "debug");

        // SAFETY: see above.
        unsafe {
            env::set_var("CHDSN_LOG_LEVEL", "Trace");
            env::set_var("CHDSN_LOG_FORMAT", "compact");
        }
        assert_eq!(get_log_level(), "trace");
        assert_eq!(get_log_format(), "compact");

        // SAFETY: see above.
        unsafe {
            env::remove_var("CHDSN_DEBUG");
            env::remove_var("CHDSN_LOG_LEVEL");
            env::remove_var("CHDSN_LOG_FORMAT");
        }
    }
}
