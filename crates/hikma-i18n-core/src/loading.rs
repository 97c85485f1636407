//! Building a [`TranslationTable`] from bundled assets or from disk.
//!
//! Both sources share one layout: `{language}/{domain}.ftl`.

use crate::error::TableError;
use crate::language::Language;
use crate::table::TranslationTable;
use rust_embed::RustEmbed;
use std::path::Path;
use strum::IntoEnumIterator as _;

/// Translation resources compiled into the binary.
pub trait EmbeddedAssets: RustEmbed + Send + Sync + 'static {
    fn domain() -> &'static str;
}

fn resource_file(language: Language, domain: &str) -> String {
    format!("{}/{}.ftl", language, domain)
}

impl TranslationTable {
    /// Loads every site language found in the embedded assets.
    ///
    /// A language without a resource file is skipped with a warning; the
    /// table then simply does not support it.
    pub fn from_embedded<T: EmbeddedAssets>() -> Result<Self, TableError> {
        let mut table = Self::new();

        for language in Language::iter() {
            let path = resource_file(language, T::domain());
            let Some(file) = T::get(&path) else {
                tracing::warn!("No embedded translations at '{}'", path);
                continue;
            };

            let content = String::from_utf8(file.data.into_owned())
                .map_err(|source| TableError::InvalidUtf8 { path, source })?;
            table.add_resource(language, content)?;
        }

        Ok(table)
    }

    /// Loads every site language found under `assets_dir`.
    pub fn from_dir(assets_dir: &Path, domain: &str) -> Result<Self, TableError> {
        let mut table = Self::new();

        for language in Language::iter() {
            let path = assets_dir.join(resource_file(language, domain));
            if !path.is_file() {
                tracing::warn!("No translations at '{}'", path.display());
                continue;
            }

            let content = fs_err::read_to_string(&path)?;
            table.add_resource(language, content)?;
        }

        Ok(table)
    }
}
