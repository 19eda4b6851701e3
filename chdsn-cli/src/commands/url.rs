//! `chdsn url` command - Print the HTTP request URL for a DSN.

use chdsn_core::parse_dsn;

use crate::cli::UrlArgs;
use crate::error::CliResult;
use crate::output;

/// Run the url command
pub fn run(args: UrlArgs) -> CliResult<()> {
    let config = parse_dsn(&args.dsn)?;
    output::plain(&config.request_url(args.settings));
    Ok(())
}
