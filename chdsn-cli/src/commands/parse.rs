//! `chdsn parse` command - Show the fields of a DSN.

use std::time::Duration;

use chdsn_core::value::{format_duration, format_location};
use chdsn_core::{Config, parse_dsn};
use serde_json::{Value, json};

use crate::cli::ParseArgs;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the parse command
pub fn run(args: ParseArgs) -> CliResult<()> {
    let config = parse_dsn(&args.dsn)?;

    if args.json {
        output::plain(&serde_json::to_string_pretty(&to_json(&config))?);
        return Ok(());
    }

    output::header("DSN");

    kv("Scheme", &config.scheme);
    kv("Host", &config.host);
    kv("Database", or_default(&config.database));
    kv("User", if config.has_credentials() { &config.user } else { "(anonymous)" });
    kv("Password", if config.password.is_empty() { "(none)" } else { &config.password });
    kv("Timeout", &duration_or_unset(config.timeout));
    kv("Idle timeout", &format_duration(config.idle_timeout));
    kv("Read timeout", &duration_or_unset(config.read_timeout));
    kv("Write timeout", &duration_or_unset(config.write_timeout));
    kv("Location", format_location(config.location));
    kv("Debug", if config.debug { "yes" } else { "no" });

    if !config.params.is_empty() {
        output::newline();
        output::section("Parameters");
        for (key, value) in &config.params {
            output::list_item(&format!("{key} = {value}"));
        }
    }

    output::newline();
    Ok(())
}

/// Describe every field of the configuration as JSON.
pub fn to_json(config: &Config) -> Value {
    json!({
        "scheme": config.scheme,
        "host": config.host,
        "database": config.database,
        "user": config.user,
        "password": config.password,
        "timeout": optional_duration(config.timeout),
        "idle_timeout": format_duration(config.idle_timeout),
        "read_timeout": optional_duration(config.read_timeout),
        "write_timeout": optional_duration(config.write_timeout),
        "location": format_location(config.location),
        "debug": config.debug,
        "params": config.params,
    })
}

fn or_default(value: &str) -> &str {
    if value.is_empty() { "(server default)" } else { value }
}

fn duration_or_unset(duration: Duration) -> String {
    optional_duration(duration).unwrap_or_else(|| "(unset)".to_string())
}

fn optional_duration(duration: Duration) -> Option<String> {
    (!duration.is_zero()).then(|| format_duration(duration))
}
