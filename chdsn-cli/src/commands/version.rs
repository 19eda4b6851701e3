//! `chdsn version` command - Display version information.

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub fn run() -> CliResult<()> {
    output::header("chdsn");

    kv("Version", VERSION);
    kv("Package", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();
    output::section("Defaults");
    kv("Scheme", chdsn_core::DEFAULT_SCHEME);
    kv("Host", chdsn_core::DEFAULT_HOST);
    kv(
        "Idle timeout",
        &chdsn_core::value::format_duration(chdsn_core::DEFAULT_IDLE_TIMEOUT),
    );

    output::newline();
    Ok(())
}
