//! CLI argument definitions using clap.

use std::time::Duration;

use chdsn_core::value::{parse_duration, parse_location};
use chdsn_core::{Config, DEFAULT_HOST, DEFAULT_SCHEME, Tz};
use clap::{Args, Parser, Subcommand};

/// chdsn - Inspect and build analytical database DSNs
#[derive(Parser, Debug)]
#[command(name = "chdsn")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "chdsn - Inspect and build analytical database DSNs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a DSN and show its fields
    Parse(ParseArgs),

    /// Build a DSN from individual settings
    Format(FormatArgs),

    /// Validate a DSN and print its canonical form
    Check(CheckArgs),

    /// Print the HTTP request URL for a DSN
    Url(UrlArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Parse Command
// =============================================================================

/// Arguments for the `parse` command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// DSN to parse
    #[arg(env = "CHDSN_DSN")]
    pub dsn: String,

    /// Print the fields as JSON
    #[arg(long)]
    pub json: bool,
}

// =============================================================================
// Format Command
// =============================================================================

/// Arguments for the `format` command
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Transport scheme
    #[arg(long, default_value = DEFAULT_SCHEME)]
    pub scheme: String,

    /// Server address as host:port
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Database name
    #[arg(short, long, default_value = "")]
    pub database: String,

    /// Username
    #[arg(short, long, default_value = "")]
    pub user: String,

    /// Password (ignored without --user)
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Connection timeout, e.g. 5s
    #[arg(long, value_parser = duration_arg)]
    pub timeout: Option<Duration>,

    /// Idle timeout for pooled connections, e.g. 10m
    #[arg(long, value_parser = duration_arg)]
    pub idle_timeout: Option<Duration>,

    /// Read timeout, e.g. 30s
    #[arg(long, value_parser = duration_arg)]
    pub read_timeout: Option<Duration>,

    /// Write timeout, e.g. 30s
    #[arg(long, value_parser = duration_arg)]
    pub write_timeout: Option<Duration>,

    /// Time zone name, e.g. Europe/Berlin
    #[arg(long, value_parser = location_arg)]
    pub location: Option<Tz>,

    /// Enable driver debug output
    #[arg(long)]
    pub debug: bool,

    /// Passthrough server setting as key=value (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = key_value_arg)]
    pub params: Vec<(String, String)>,
}

impl FormatArgs {
    /// Build the configuration described by these arguments.
    pub fn to_config(&self) -> Config {
        let mut config = Config::new()
            .scheme(&self.scheme)
            .host(&self.host)
            .database(&self.database)
            .user(&self.user)
            .password(&self.password)
            .debug(self.debug);

        if let Some(timeout) = self.timeout {
            config = config.timeout(timeout);
        }
        if let Some(timeout) = self.idle_timeout {
            config = config.idle_timeout(timeout);
        }
        if let Some(timeout) = self.read_timeout {
            config = config.read_timeout(timeout);
        }
        if let Some(timeout) = self.write_timeout {
            config = config.write_timeout(timeout);
        }
        if let Some(location) = self.location {
            config = config.location(location);
        }
        for (key, value) in &self.params {
            config = config.param(key, value);
        }

        config
    }
}

// =============================================================================
// Check Command
// =============================================================================

/// Arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// DSN to validate
    #[arg(env = "CHDSN_DSN")]
    pub dsn: String,
}

// =============================================================================
// Url Command
// =============================================================================

/// Arguments for the `url` command
#[derive(Args, Debug)]
pub struct UrlArgs {
    /// DSN to convert
    #[arg(env = "CHDSN_DSN")]
    pub dsn: String,

    /// Per-request server setting as key=value (repeatable)
    #[arg(short, long = "setting", value_name = "KEY=VALUE", value_parser = key_value_arg)]
    pub settings: Vec<(String, String)>,
}

fn duration_arg(value: &str) -> Result<Duration, String> {
    parse_duration(value).ok_or_else(|| format!("invalid duration '{value}'"))
}

fn location_arg(value: &str) -> Result<Tz, String> {
    parse_location(value).ok_or_else(|| format!("unknown time zone '{value}'"))
}

fn key_value_arg(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{value}'")),
    }
}
