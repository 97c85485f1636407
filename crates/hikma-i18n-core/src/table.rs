//! The static source of every localized string on the site.
//!
//! Strings live in Fluent resources, one or more per [`Language`]. A
//! translation key such as `nav.home` addresses the `home` attribute of the
//! `nav` message; a key without a dot addresses a message value:
//!
//! ```ftl
//! -brand = Hikma Digital
//!
//! nav =
//!     .home = Home
//!     .pricing = Pricing
//!
//! footer-rights = © 2025 { -brand }. All rights reserved.
//! ```

use crate::error::TableError;
use crate::language::Language;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use fluent_syntax::ast;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use strum::IntoEnumIterator as _;

/// Splits a translation key into its Fluent message id and attribute name.
fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('.') {
        Some((message, attribute)) => (message, Some(attribute)),
        None => (key, None),
    }
}

/// Keys of the messages in `resource` that a bundle will accept: the first
/// definition of each id, skipping ids `is_taken` reports as already loaded.
fn collect_keys(resource: &FluentResource, is_taken: impl Fn(&str) -> bool) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut keys = Vec::new();
    for entry in resource.entries() {
        let ast::Entry::Message(message) = entry else {
            continue;
        };
        let id = message.id.name;
        if is_taken(id) || !seen.insert(id) {
            continue;
        }
        if message.value.is_some() {
            keys.push(id.to_string());
        }
        keys.extend(
            message
                .attributes
                .iter()
                .map(|attribute| format!("{}.{}", id, attribute.id.name)),
        );
    }
    keys
}

/// Immutable mapping of language → translation key → localized string.
#[derive(Default)]
pub struct TranslationTable {
    bundles: FxHashMap<Language, FluentBundle<FluentResource>>,
    keys: FxHashMap<Language, BTreeSet<String>>,
}

impl fmt::Debug for TranslationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for language in self.languages() {
            map.entry(&language, &self.keys.get(&language).map_or(0, BTreeSet::len));
        }
        map.finish()
    }
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(language, ftl source)` pairs.
    pub fn from_sources<I, S>(sources: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (Language, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (language, source) in sources {
            table.add_resource(language, source)?;
        }
        Ok(table)
    }

    /// Parses `source` and adds its messages to `language`.
    ///
    /// A message defined twice for the same language is rejected; the
    /// first definition stays in effect and only its keys are listed.
    pub fn add_resource(
        &mut self,
        language: Language,
        source: impl Into<String>,
    ) -> Result<(), TableError> {
        let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
            TableError::Parse {
                language,
                details: format!("{:?}", errors),
            }
        })?;

        let bundle = self.bundles.entry(language).or_insert_with(|| {
            let mut bundle = FluentBundle::new_concurrent(vec![language.langid()]);
            bundle.set_use_isolating(false);
            bundle
        });
        let keys = collect_keys(&resource, |id| bundle.has_message(id));

        let added = bundle.add_resource(resource);
        self.keys.entry(language).or_default().extend(keys);

        added.map_err(|errors| TableError::Duplicate {
            language,
            details: format!("{:?}", errors),
        })?;

        tracing::debug!("Loaded {} translations", language);
        Ok(())
    }

    /// Languages with at least one resource, in declaration order.
    pub fn languages(&self) -> Vec<Language> {
        Language::iter()
            .filter(|language| self.bundles.contains_key(language))
            .collect()
    }

    pub fn supports(&self, language: Language) -> bool {
        self.bundles.contains_key(&language)
    }

    /// All keys defined for `language`, sorted.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &str> {
        self.keys
            .get(&language)
            .into_iter()
            .flat_map(|keys| keys.iter().map(String::as_str))
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.keys
            .get(&language)
            .is_some_and(|keys| keys.contains(key))
    }

    /// Looks up `key` for `language`. A missing key, or one whose
    /// translation is empty, yields `None`.
    pub fn lookup(&self, language: Language, key: &str) -> Option<String> {
        self.lookup_with_args(language, key, None)
    }

    /// Looks up and formats `key` with Fluent arguments.
    pub fn lookup_with_args(
        &self,
        language: Language,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let (message_id, attribute) = split_key(key);
        let message = bundle.get_message(message_id)?;
        let pattern = match attribute {
            Some(name) => message.get_attribute(name)?.value(),
            None => message.value()?,
        };

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            tracing::error!(
                "Fluent formatting errors for '{}' ({}): {:?}",
                key,
                language,
                errors
            );
            return None;
        }

        Some(value.into_owned()).filter(|value| !value.is_empty())
    }

    /// Compares every other language against `reference`.
    pub fn completeness(&self, reference: Language) -> CompletenessReport {
        let empty = BTreeSet::new();
        let reference_keys = self.keys.get(&reference).unwrap_or(&empty);
        let mut report = CompletenessReport {
            reference,
            missing: BTreeMap::new(),
            extra: BTreeMap::new(),
        };

        for language in Language::iter().filter(|language| *language != reference) {
            let keys = self.keys.get(&language).unwrap_or(&empty);

            let missing: Vec<String> = reference_keys.difference(keys).cloned().collect();
            if !missing.is_empty() {
                report.missing.insert(language, missing);
            }

            let extra: Vec<String> = keys.difference(reference_keys).cloned().collect();
            if !extra.is_empty() {
                report.extra.insert(language, extra);
            }
        }

        report
    }
}

/// Result of [`TranslationTable::completeness`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompletenessReport {
    pub reference: Language,
    /// Keys of the reference language absent from another language.
    pub missing: BTreeMap<Language, Vec<String>>,
    /// Keys a language defines that the reference language does not.
    pub extra: BTreeMap<Language, Vec<String>>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }

    pub fn extra_count(&self) -> usize {
        self.extra.values().map(Vec::len).sum()
    }
}
