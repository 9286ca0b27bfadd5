//! Internationalization (i18n) module for the page's locales.
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Validated `Locale` handle used by the controller and renderers
//! - `strings`: UI strings owned by the page (toggle labels, load failure message)
//!
//! # Example
//!
//! ```rust,ignore
//! use cv_page::i18n::Locale;
//!
//! let english = Locale::from_code("en")?;
//! assert_eq!(english.next(), Locale::default_locale());
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::LocaleStrings;
