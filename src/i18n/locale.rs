//! Locale type: a validated handle onto a registry entry.

use crate::i18n::{LocaleConfig, LocaleRegistry, LocaleStrings};
use anyhow::{bail, Result};
use std::fmt;

/// A supported, enabled locale.
///
/// Only constructible through the registry, so holding a `Locale` means the
/// page has a content document and UI strings for it.
#[derive(Clone, Copy)]
pub struct Locale {
    config: &'static LocaleConfig,
}

impl Locale {
    /// Create a Locale from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is known and enabled
    /// * `Err` if the code is not found or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { config }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The fallback locale used when nothing else resolves.
    pub fn default_locale() -> Locale {
        Locale {
            config: LocaleRegistry::get().default_locale(),
        }
    }

    /// All enabled locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { config })
            .collect()
    }

    /// The locale the toggle switches to: the next enabled locale in registry
    /// order, wrapping around. With two locales this is "the other one".
    pub fn next(&self) -> Locale {
        let all = Self::all();
        let position = all.iter().position(|locale| locale == self).unwrap_or(0);
        all[(position + 1) % all.len()]
    }

    pub fn code(&self) -> &'static str {
        self.config.code
    }

    pub fn name(&self) -> &'static str {
        self.config.name
    }

    pub fn native_name(&self) -> &'static str {
        self.config.native_name
    }

    /// Path of this locale's content document, relative to the content root.
    pub fn content_path(&self) -> &'static str {
        self.config.content_path
    }

    /// UI strings written in this locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        LocaleStrings::for_code(self.config.code)
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.config.code == other.config.code
    }
}

impl Eq for Locale {}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locale").field(&self.config.code).finish()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config.code)
    }
}
