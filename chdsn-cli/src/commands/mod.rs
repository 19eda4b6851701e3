//! CLI command implementations.

pub mod check;
pub mod format;
pub mod parse;
pub mod url;
pub mod version;
