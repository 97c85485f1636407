use crate::language::Language;
use fluent_fallback::env::LocalesProvider;
use strum::IntoEnumIterator as _;
use unic_langid::LanguageIdentifier;

/// Locales tried for `requested`, most specific first.
///
/// A tag carrying a script, region or variant (`ar-Arab-AE`) is followed by
/// its bare language (`ar`).
pub fn fallback_locales(requested: &LanguageIdentifier) -> impl LocalesProvider + use<> {
    let bare = LanguageIdentifier::from_parts(requested.language, None, None, &[]);
    if &bare == requested {
        vec![bare]
    } else {
        vec![requested.clone(), bare]
    }
}

/// Maps an arbitrary BCP-47 identifier (e.g. a browser's `ar-AE`) onto a
/// site language.
pub fn negotiate_language(requested: &LanguageIdentifier) -> Option<Language> {
    fallback_locales(requested)
        .locales()
        .find_map(|candidate| Language::iter().find(|language| language.langid() == candidate))
}
