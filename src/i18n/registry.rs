//! Locale registry: Single source of truth for all supported page locales.
//!
//! The registry is built once on first access (`OnceLock`) and is immutable
//! thereafter. Registry order is significant: the language toggle walks it to
//! find the next locale.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "ja", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Japanese", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "日本語", "English")
    pub native_name: &'static str,

    /// Path of the content document, relative to the content root
    pub content_path: &'static str,

    /// Whether this is the fallback locale (only one should be true)
    pub is_default: bool,

    /// Whether this locale can be selected
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists (enabled or not)
    /// * `None` if the code is unknown
    pub fn get_by_code(&'static self, code: &str) -> Option<&'static LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&'static self) -> Vec<&'static LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default is the locale used when neither a stored preference nor
    /// the host document names a supported one.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one enabled default.
    /// This indicates a configuration error in `default_locales`.
    pub fn default_locale(&'static self) -> &'static LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default && locale.enabled)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }
}

/// The supported locales: Japanese (default) and English.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            content_path: "data/ja.json",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            content_path: "data/en.json",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_japanese() {
        let config = LocaleRegistry::get().get_by_code("ja").unwrap();
        assert_eq!(config.name, "Japanese");
        assert_eq!(config.native_name, "日本語");
        assert_eq!(config.content_path, "data/ja.json");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get().get_by_code("en").unwrap();
        assert_eq!(config.content_path, "data/en.json");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
        assert!(LocaleRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_list_enabled_preserves_order() {
        let codes: Vec<_> = LocaleRegistry::get()
            .list_enabled()
            .iter()
            .map(|locale| locale.code)
            .collect();
        assert_eq!(codes, vec!["ja", "en"]);
    }

    #[test]
    fn test_default_locale_is_japanese() {
        assert_eq!(LocaleRegistry::get().default_locale().code, "ja");
    }
}
