use super::load_with_config;
use crate::error::CliError;
use crate::ui;
use clap::Parser;
use hikma_i18n::{I18nConfig, Language};
use std::path::PathBuf;

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Directory containing i18n.toml.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Also fail when a language defines keys the default language lacks.
    #[arg(long)]
    pub strict: bool,
}

/// Compares every language against the configured default language.
pub fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let config = I18nConfig::from_manifest_dir(&args.path)?;

    // Directories for languages the site does not publish are never loaded.
    if config.assets_dir_from_base(&args.path).is_dir() {
        for tag in config.available_languages_from_base(&args.path)? {
            let code = tag.to_string();
            if Language::from_code(&code).is_err() {
                ui::print_skipped_directory(&code);
            }
        }
    }

    let localization = load_with_config(&config, &args.path)?;
    let table = localization.table();
    let reference = localization.language();

    ui::print_check_header(reference, &table.languages());

    let report = table.completeness(reference);
    ui::print_report(&report);

    let missing = report.missing_count();
    let extra = report.extra_count();
    if missing == 0 && (!args.strict || extra == 0) {
        ui::print_check_success();
        Ok(())
    } else {
        Err(CliError::Incomplete { missing, extra })
    }
}
