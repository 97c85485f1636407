//! CLI command implementations.

mod check;
mod languages;
mod translate;

pub use check::{CheckArgs, run_check};
pub use languages::run_languages;
pub use translate::{TranslateArgs, run_translate};

use crate::error::CliError;
use hikma_i18n::{I18nConfig, Localization};
use std::path::Path;

/// Loads the translations described by `{dir}/i18n.toml`.
fn load_from_dir(dir: &Path) -> Result<Localization, CliError> {
    let config = I18nConfig::from_manifest_dir(dir)?;
    load_with_config(&config, dir)
}

fn load_with_config(config: &I18nConfig, dir: &Path) -> Result<Localization, CliError> {
    tracing::debug!("Using {} translations under '{}'", config.domain(), dir.display());
    Ok(Localization::from_config(config, dir)?)
}
