//! Implementation of the `hikma-i18n` command line tool.

pub mod commands;
pub mod error;
pub mod ui;

pub use error::CliError;
