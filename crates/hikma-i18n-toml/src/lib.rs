//! Reading and resolving the `i18n.toml` file that describes where a crate
//! keeps its translation resources.
//!
//! ```toml
//! default_language = "en"
//! assets_dir = "i18n"
//! domain = "hikma"
//! ```
//!
//! Resources are expected at `{assets_dir}/{language}/{domain}.ftl`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::io;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// File name looked up next to a crate manifest.
pub const CONFIG_FILE_NAME: &str = "i18n.toml";

/// Resource domain used when `domain` is omitted.
pub const DEFAULT_DOMAIN: &str = "hikma";

#[derive(Debug, Error)]
pub enum I18nConfigError {
    /// Configuration file not found.
    #[error("i18n.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A directory under the assets directory is not a language identifier.
    #[error("Invalid language identifier '{name}' found in assets directory")]
    InvalidLanguageIdentifier {
        name: String,
        #[source]
        source: LanguageIdentifierError,
    },
    /// `default_language` is not a language identifier.
    #[error("Invalid default language identifier '{name}'")]
    InvalidDefaultLanguageIdentifier {
        name: String,
        #[source]
        source: LanguageIdentifierError,
    },
    /// `domain` cannot be used as a file stem.
    #[error("Invalid resource domain '{0}'")]
    InvalidDomain(String),
}

/// Contents of `i18n.toml`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct I18nConfig {
    /// Language active when a session starts and the reference for
    /// completeness checks (e.g. "en").
    pub default_language: String,
    /// Directory holding one sub-directory per language.
    pub assets_dir: PathBuf,
    /// Resource file stem inside each language directory.
    #[serde(default)]
    pub domain: Option<String>,
}

impl I18nConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, I18nConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(I18nConfigError::NotFound);
        }

        let content = fs_err::read_to_string(path)?;
        let config: I18nConfig = toml::from_str(&content)?;
        config.validate_domain()?;

        Ok(config)
    }

    /// Reads `i18n.toml` from the given directory.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, I18nConfigError> {
        Self::read_from_path(manifest_dir.join(CONFIG_FILE_NAME))
    }

    /// The resource domain, defaulting to [`DEFAULT_DOMAIN`].
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or(DEFAULT_DOMAIN)
    }

    /// Resolves the assets directory against the directory holding
    /// `i18n.toml`.
    pub fn assets_dir_from_base(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.assets_dir)
    }

    /// Returns `default_language` as a `LanguageIdentifier`.
    pub fn default_language_identifier(&self) -> Result<LanguageIdentifier, I18nConfigError> {
        self.default_language
            .parse::<LanguageIdentifier>()
            .map_err(|source| I18nConfigError::InvalidDefaultLanguageIdentifier {
                name: self.default_language.clone(),
                source,
            })
    }

    /// Returns the language directories present under the assets directory,
    /// sorted by tag.
    pub fn available_languages_from_base(
        &self,
        base_dir: &Path,
    ) -> Result<Vec<LanguageIdentifier>, I18nConfigError> {
        let assets_path = self.assets_dir_from_base(base_dir);
        let mut languages = Vec::new();

        for entry in fs_err::read_dir(&assets_path)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let name = entry.file_name().into_string().map_err(|raw| {
                I18nConfigError::ReadError(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Assets directory contains a non UTF-8 entry: {:?}", raw),
                ))
            })?;

            let lang = name.parse::<LanguageIdentifier>().map_err(|source| {
                I18nConfigError::InvalidLanguageIdentifier {
                    name: name.clone(),
                    source,
                }
            })?;
            languages.push(lang);
        }

        languages.sort_by_key(|lang| lang.to_string());
        languages.dedup();

        Ok(languages)
    }

    fn validate_domain(&self) -> Result<(), I18nConfigError> {
        let domain = self.domain();
        let valid = !domain.is_empty()
            && domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(())
        } else {
            Err(I18nConfigError::InvalidDomain(domain.to_string()))
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            assets_dir: PathBuf::from("i18n"),
            domain: None,
        }
    }
}
