use crate::localization::Localization;
use crate::style::FONT_CLASSES;
use hikma_i18n_core::{Direction, Language};
use std::fmt;

/// The direction boundary of a localized page.
///
/// Obtained from [`Localization::scope`]. Every subtree wrapped through the
/// scope carries the direction of the language active at wrap time, so a
/// re-render after a language switch picks up the new direction.
#[derive(Debug)]
pub struct DirectionScope<'a> {
    localization: &'a Localization,
}

impl<'a> DirectionScope<'a> {
    pub(crate) fn new(localization: &'a Localization) -> Self {
        Self { localization }
    }

    pub fn direction(&self) -> Direction {
        self.localization.direction()
    }

    pub fn wrap(&self, children: impl Into<String>) -> ScopedSubtree {
        let language = self.localization.language();
        let direction = language.direction();

        ScopedSubtree {
            language,
            direction,
            class: *FONT_CLASSES.resolve(direction),
            children: children.into(),
        }
    }
}

impl Drop for DirectionScope<'_> {
    fn drop(&mut self) {
        self.localization.release_scope();
    }
}

/// Markup decorated with its language and direction.
///
/// Renders as a `div` root:
/// `<div dir="rtl" lang="ar" class="font-arabic">…</div>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScopedSubtree {
    language: Language,
    direction: Direction,
    class: &'static str,
    children: String,
}

impl ScopedSubtree {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn dir_attribute(&self) -> &'static str {
        self.direction.as_attr()
    }

    pub fn class(&self) -> &'static str {
        self.class
    }

    pub fn children(&self) -> &str {
        &self.children
    }
}

impl fmt::Display for ScopedSubtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<div dir="{}" lang="{}" class="{}">{}</div>"#,
            self.dir_attribute(),
            self.language,
            self.class,
            self.children
        )
    }
}
