//! CLI error types and result alias.

use chdsn_core::DsnError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// DSN parsing or validation error
    #[error("DSN error: {0}")]
    #[diagnostic(
        code(chdsn::dsn),
        help("expected scheme://[user[:password]@]host[:port]/[database][?key=value&...]")
    )]
    Dsn(#[from] DsnError),

    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(chdsn::io))]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("Serialization error: {0}")]
    #[diagnostic(code(chdsn::json))]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dsn_error_display() {
        let err = CliError::from(DsnError::unknown_option("query"));
        assert_eq!(err.to_string(), "DSN error: unknown option 'query'");
    }

    #[test]
    fn test_dsn_error_has_help() {
        let err = CliError::from(DsnError::invalid_boolean("yes"));
        assert!(err.help().is_some());
        assert_eq!(err.code().map(|c| c.to_string()), Some("chdsn::dsn".to_string()));
    }
}
