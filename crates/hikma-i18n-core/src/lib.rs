//! Core of the Hikma localization stack.
//!
//! This crate owns the pieces that do not depend on any presentation layer:
//! the closed set of site languages and their reading direction, the Fluent
//! backed [`TranslationTable`], and the observable [`LanguageStore`].

pub mod error;
pub mod fallback;
pub mod language;
pub mod loading;
pub mod store;
pub mod table;

pub use error::{LocalizationError, TableError};
pub use fallback::{fallback_locales, negotiate_language};
pub use language::{Direction, DirectionInfo, Language, resolve_direction};
pub use loading::EmbeddedAssets;
pub use store::{LanguageChange, LanguageStore, SubscriptionId};
pub use table::{CompletenessReport, TranslationTable};
