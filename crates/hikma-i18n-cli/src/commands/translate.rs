use super::load_from_dir;
use crate::error::CliError;
use clap::Parser;
use hikma_i18n::{FluentValue, Localization};
use std::collections::HashMap;
use std::path::PathBuf;

/// Arguments for the translate command.
#[derive(Debug, Parser)]
pub struct TranslateArgs {
    /// Translation key, e.g. `nav.home`.
    pub key: String,

    /// Language code or BCP-47 tag (`ar`, `ar-AE`).
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Read translations from the i18n.toml in this directory instead of
    /// the bundled ones.
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Fluent argument as `name=value`. Can be repeated.
    #[arg(long = "arg", value_parser = parse_arg)]
    pub args: Vec<(String, String)>,
}

fn parse_arg(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

/// Prints the translation of a key, or the key itself when it is missing.
pub fn run_translate(args: TranslateArgs) -> Result<(), CliError> {
    let localization = match &args.path {
        Some(path) => load_from_dir(path)?,
        None => Localization::embedded()?,
    };
    localization.negotiate_language(&args.lang)?;

    let text = if args.args.is_empty() {
        localization.translate(&args.key)
    } else {
        let fluent_args: HashMap<&str, FluentValue<'_>> = args
            .args
            .iter()
            .map(|(name, value)| (name.as_str(), FluentValue::from(value.as_str())))
            .collect();
        localization.translate_with_args(&args.key, &fluent_args)
    };

    println!("{}", text);
    Ok(())
}
