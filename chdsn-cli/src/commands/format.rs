//! `chdsn format` command - Build a DSN from individual settings.

use crate::cli::FormatArgs;
use crate::error::CliResult;
use crate::output;

/// Run the format command
pub fn run(args: FormatArgs) -> CliResult<()> {
    let config = args.to_config();
    config.validate()?;

    output::plain(&config.format_dsn());
    Ok(())
}
