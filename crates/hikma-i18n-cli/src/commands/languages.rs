use crate::error::CliError;
use crate::ui;
use hikma_i18n::{Language, Localization};
use strum::IntoEnumIterator as _;

/// Lists every site language and whether the bundled strings cover it.
pub fn run_languages() -> Result<(), CliError> {
    let localization = Localization::embedded()?;
    for language in Language::iter() {
        ui::print_language(language, localization.table().supports(language));
    }
    Ok(())
}
