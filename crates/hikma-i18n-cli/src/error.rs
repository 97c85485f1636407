use hikma_i18n::{I18nConfigError, LocalizationError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error("Failed to load i18n.toml: {0}")]
    #[diagnostic(
        code(hikma_i18n::config),
        help(
            "Create an i18n.toml file next to your translations with the following content:\n\n  \
              default_language = \"en\"\n  \
              assets_dir = \"i18n\"\n"
        )
    )]
    Config(#[from] I18nConfigError),

    #[error(transparent)]
    #[diagnostic(code(hikma_i18n::localization))]
    Localization(#[from] LocalizationError),

    #[error("{missing} translation(s) missing, {extra} unexpected")]
    #[diagnostic(
        code(hikma_i18n::check::incomplete),
        help("Add each missing key to the language's .ftl file, or remove keys the default language does not define")
    )]
    Incomplete { missing: usize, extra: usize },
}
