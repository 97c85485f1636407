use hikma_i18n_core::EmbeddedAssets;
use rust_embed::RustEmbed;

/// The site's English and Arabic strings, compiled in from `i18n/`.
#[derive(RustEmbed)]
#[folder = "i18n/"]
pub struct HikmaAssets;

impl EmbeddedAssets for HikmaAssets {
    fn domain() -> &'static str {
        hikma_i18n_toml::DEFAULT_DOMAIN
    }
}
