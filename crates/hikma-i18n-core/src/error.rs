use crate::language::Language;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Language code '{0}' is not one of the supported languages")]
    UnsupportedLanguage(String),
    #[error("Language '{0}' has no translations loaded")]
    LanguageNotSupported(Language),
    #[error("A direction scope is already active for this localization")]
    DirectionScopeActive,
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Errors raised while building a [`TranslationTable`](crate::TranslationTable).
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to parse {language} translations: {details}")]
    Parse { language: Language, details: String },
    #[error("Duplicate {language} translations: {details}")]
    Duplicate { language: Language, details: String },
    #[error("Translation file '{path}' is not valid UTF-8")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: FromUtf8Error,
    },
    #[error("Failed to read translations: {0}")]
    Io(#[from] std::io::Error),
}
