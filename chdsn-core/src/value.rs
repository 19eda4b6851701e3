//! Typed option values carried in DSN query strings.
//!
//! Each option has a parser returning `None` on malformed input, so callers
//! can attach their own key and raw value to the error, and a formatter
//! producing the canonical spelling written back by
//! [`Config::format_dsn`](crate::Config::format_dsn).

use std::time::Duration;

use chrono_tz::Tz;

/// Parse a duration expression such as `5s`, `100ms`, `2h` or `1h30m`.
///
/// Units may be chained with or without whitespace between them. Long unit
/// names (`5 seconds`, `2days`), fractions (`1.5s`) and a leading `+` are
/// accepted as well; negative durations are not.
pub fn parse_duration(value: &str) -> Option<Duration> {
    humantime::parse_duration(value).ok()
}

/// Canonical spelling of a duration, e.g. `1h 30m`.
///
/// A zero duration is written as `0s`.
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

/// Parse a boolean in one of the conventional spellings.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Resolve an IANA timezone name such as `Europe/Berlin`.
///
/// An empty name resolves to UTC.
pub fn parse_location(value: &str) -> Option<Tz> {
    if value.is_empty() {
        return Some(Tz::UTC);
    }
    value.parse::<Tz>().ok()
}

/// Canonical name of a timezone.
pub fn format_location(location: Tz) -> &'static str {
    location.name()
}
