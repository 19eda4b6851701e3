//! `chdsn check` command - Validate a DSN.

use chdsn_core::parse_dsn;

use crate::cli::CheckArgs;
use crate::error::CliResult;
use crate::output;

/// Run the check command
pub fn run(args: CheckArgs) -> CliResult<()> {
    let config = parse_dsn(&args.dsn)?;
    config.validate()?;

    let canonical = config.format_dsn();
    output::success("DSN is valid");
    if canonical != args.dsn {
        output::warn("Canonical form differs from input");
    }
    output::plain(&canonical);

    Ok(())
}
