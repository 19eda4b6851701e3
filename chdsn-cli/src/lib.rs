//! chdsn CLI - Command-line interface for the chdsn DSN codec.
//!
//! This crate provides the `chdsn` tool for parsing, checking and
//! building connection strings.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
