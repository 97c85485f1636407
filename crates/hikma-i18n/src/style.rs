use hikma_i18n_core::Direction;

/// A left-to-right value and its right-to-left counterpart.
///
/// Pages resolve direction-dependent styling through a pair instead of
/// branching on `is_rtl` at every call site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StylePair<T> {
    pub ltr: T,
    pub rtl: T,
}

impl<T> StylePair<T> {
    pub const fn new(ltr: T, rtl: T) -> Self {
        Self { ltr, rtl }
    }

    pub fn resolve(&self, direction: Direction) -> &T {
        direction.pick(&self.ltr, &self.rtl)
    }
}

/// Body font classes.
pub const FONT_CLASSES: StylePair<&str> = StylePair::new("font-inter", "font-arabic");

pub const TEXT_ALIGN: StylePair<&str> = StylePair::new("text-left", "text-right");

pub const FLEX_ROW: StylePair<&str> = StylePair::new("flex-row", "flex-row-reverse");
