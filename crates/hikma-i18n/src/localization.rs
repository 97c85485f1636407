use crate::assets::HikmaAssets;
use crate::contact::FormType;
use crate::scope::DirectionScope;
use crate::style::StylePair;
use fluent_bundle::{FluentArgs, FluentValue};
use hikma_i18n_core::{
    Direction, DirectionInfo, Language, LanguageChange, LanguageStore, LocalizationError,
    SubscriptionId, TableError, TranslationTable, negotiate_language, resolve_direction,
};
use hikma_i18n_toml::I18nConfig;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use unic_langid::LanguageIdentifier;

static EMBEDDED_TABLE: OnceLock<Arc<TranslationTable>> = OnceLock::new();

fn embedded_table() -> Result<Arc<TranslationTable>, TableError> {
    if let Some(table) = EMBEDDED_TABLE.get() {
        return Ok(Arc::clone(table));
    }

    let table = Arc::new(TranslationTable::from_embedded::<HikmaAssets>()?);
    Ok(Arc::clone(EMBEDDED_TABLE.get_or_init(|| table)))
}

/// The single entry point pages use for text and direction.
///
/// A `Localization` is an ordinary value owned by one session. The
/// translation table behind it is shared and immutable, so creating one per
/// session or per server render is cheap.
pub struct Localization {
    table: Arc<TranslationTable>,
    store: LanguageStore,
    scope_active: AtomicBool,
}

impl fmt::Debug for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localization")
            .field("language", &self.language())
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl Localization {
    /// Creates a localization starting in the default language.
    pub fn new(table: impl Into<Arc<TranslationTable>>) -> Result<Self, LocalizationError> {
        Self::with_language(table, Language::default())
    }

    /// Creates a localization starting in `language`, which must have
    /// translations in `table`.
    pub fn with_language(
        table: impl Into<Arc<TranslationTable>>,
        language: Language,
    ) -> Result<Self, LocalizationError> {
        let table = table.into();
        if !table.supports(language) {
            return Err(LocalizationError::LanguageNotSupported(language));
        }

        Ok(Self {
            table,
            store: LanguageStore::new(language),
            scope_active: AtomicBool::new(false),
        })
    }

    /// Uses the strings bundled with this crate.
    pub fn embedded() -> Result<Self, LocalizationError> {
        Self::new(embedded_table()?)
    }

    /// Loads strings from the assets directory described by `config`,
    /// resolved against `base_dir`, and starts in its default language.
    ///
    /// `default_language` may be a regional tag such as `ar-AE`.
    pub fn from_config(config: &I18nConfig, base_dir: &Path) -> Result<Self, LocalizationError> {
        let unsupported =
            || LocalizationError::UnsupportedLanguage(config.default_language.clone());
        let requested = config
            .default_language_identifier()
            .map_err(|_| unsupported())?;
        let language = negotiate_language(&requested).ok_or_else(unsupported)?;

        let assets_dir = config.assets_dir_from_base(base_dir);
        let table = TranslationTable::from_dir(&assets_dir, config.domain())?;

        tracing::debug!(
            "Loaded translations for {:?} from '{}'",
            table.languages(),
            assets_dir.display()
        );

        Self::with_language(table, language)
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn language(&self) -> Language {
        self.store.current()
    }

    pub fn direction(&self) -> Direction {
        self.language().direction()
    }

    pub fn direction_info(&self) -> DirectionInfo {
        resolve_direction(self.language())
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    /// Switches the active language.
    ///
    /// Subscribers have been notified by the time this returns. A language
    /// with no loaded translations is rejected and the current language
    /// stays in effect.
    pub fn set_language(&self, language: Language) -> Result<(), LocalizationError> {
        if !self.table.supports(language) {
            return Err(LocalizationError::LanguageNotSupported(language));
        }

        self.store.set(language);
        Ok(())
    }

    /// Switches to the language named by a site code such as `"ar"`.
    pub fn set_language_code(&self, code: &str) -> Result<(), LocalizationError> {
        self.set_language(Language::from_code(code)?)
    }

    /// Switches to the site language closest to a BCP-47 tag such as
    /// `"ar-AE"`, returning the language chosen.
    pub fn negotiate_language(&self, tag: &str) -> Result<Language, LocalizationError> {
        let unsupported = || LocalizationError::UnsupportedLanguage(tag.to_string());
        let requested = tag
            .parse::<LanguageIdentifier>()
            .map_err(|_| unsupported())?;
        let language = negotiate_language(&requested).ok_or_else(unsupported)?;

        self.set_language(language)?;
        Ok(language)
    }

    /// Flips between English and Arabic, returning the new language.
    pub fn toggle_language(&self) -> Result<Language, LocalizationError> {
        let language = self.language().toggled();
        self.set_language(language)?;
        Ok(language)
    }

    /// Localizes a message by its key, or `None` if the active language
    /// does not define it.
    pub fn localize<'a>(
        &self,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> Option<String> {
        let fluent_args = args.map(|args| {
            let mut fa = FluentArgs::new();
            for (key, value) in args {
                fa.set(*key, value.clone());
            }
            fa
        });

        self.table
            .lookup_with_args(self.language(), id, fluent_args.as_ref())
    }

    /// Localizes `key`, rendering the key itself when no translation exists.
    pub fn translate(&self, key: &str) -> String {
        self.localize(key, None).unwrap_or_else(|| self.missing(key))
    }

    pub fn translate_with_args<'a>(
        &self,
        key: &str,
        args: &HashMap<&str, FluentValue<'a>>,
    ) -> String {
        self.localize(key, Some(args))
            .unwrap_or_else(|| self.missing(key))
    }

    fn missing(&self, key: &str) -> String {
        tracing::debug!("Translation for '{}' not found in {}", key, self.language());
        key.to_string()
    }

    pub fn form_title(&self, form_type: FormType) -> String {
        self.translate(form_type.title_key())
    }

    pub fn form_subtitle(&self, form_type: FormType) -> String {
        self.translate(form_type.subtitle_key())
    }

    /// Resolves a direction-dependent style against the active language.
    pub fn style<'p, T>(&self, pair: &'p StylePair<T>) -> &'p T {
        pair.resolve(self.direction())
    }

    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(LanguageChange) + Send + Sync + 'static,
    {
        self.store.subscribe(subscriber)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Opens the direction scope for this localization.
    ///
    /// Only one scope may be alive at a time; it is released on drop.
    pub fn scope(&self) -> Result<DirectionScope<'_>, LocalizationError> {
        self.scope_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| LocalizationError::DirectionScopeActive)?;

        Ok(DirectionScope::new(self))
    }

    pub(crate) fn release_scope(&self) {
        self.scope_active.store(false, Ordering::Release);
    }
}
