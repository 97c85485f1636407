//! Bilingual localization for the Hikma Digital site.
//!
//! Every page reads text and direction through a [`Localization`]:
//!
//! ```
//! use hikma_i18n::{Language, Localization};
//!
//! let localization = Localization::embedded()?;
//! assert_eq!(localization.translate("nav.home"), "Home");
//!
//! localization.set_language(Language::Ar)?;
//! assert!(localization.is_rtl());
//! assert_eq!(localization.translate("nav.home"), "الرئيسية");
//!
//! // Unknown keys render as themselves.
//! assert_eq!(localization.translate("calc.unknown"), "calc.unknown");
//! # Ok::<(), hikma_i18n::LocalizationError>(())
//! ```

mod assets;
mod contact;
mod localization;
mod scope;
mod style;

pub use assets::HikmaAssets;
pub use contact::{
    ContactFields, ContactFormError, ContactFormModal, ContactRequest, FormType, RequiredField,
};
pub use localization::Localization;
pub use scope::{DirectionScope, ScopedSubtree};
pub use style::{FLEX_ROW, FONT_CLASSES, StylePair, TEXT_ALIGN};

pub use fluent_bundle::FluentValue;
pub use hikma_i18n_core::{
    CompletenessReport, Direction, DirectionInfo, Language, LanguageChange, LocalizationError,
    SubscriptionId, TableError, TranslationTable, resolve_direction,
};
pub use hikma_i18n_toml::{I18nConfig, I18nConfigError};
