use crate::error::LocalizationError;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use unic_langid::{LanguageIdentifier, langid};

/// A language the site is published in.
///
/// The set is closed: nothing outside these variants can ever become the
/// active language.
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Parses a two-letter site code (`"en"`, `"ar"`).
    pub fn from_code(code: &str) -> Result<Self, LocalizationError> {
        code.parse::<Self>().map_err(|_| LocalizationError::UnsupportedLanguage(code.to_string()))
    }

    pub fn code(self) -> &'static str {
        self.into()
    }

    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Self::En => langid!("en"),
            Self::Ar => langid!("ar"),
        }
    }

    /// Name of the language written in that language, as shown on the
    /// header toggle.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }

    /// The language the header toggle switches to.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

/// Reading direction of a language.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Value for an HTML `dir` attribute.
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Picks the left-to-right or right-to-left alternative.
    pub fn pick<T>(self, ltr: T, rtl: T) -> T {
        match self {
            Self::Ltr => ltr,
            Self::Rtl => rtl,
        }
    }
}

/// Direction metadata handed to rendering code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirectionInfo {
    pub is_rtl: bool,
    pub dir_attribute: &'static str,
}

pub fn resolve_direction(language: Language) -> DirectionInfo {
    let direction = language.direction();
    DirectionInfo {
        is_rtl: direction.is_rtl(),
        dir_attribute: direction.as_attr(),
    }
}
