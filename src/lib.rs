//! Localized curriculum vitae page.
//!
//! A content document per locale is translated into view mutations against a
//! host document, and a controller switches the active locale at runtime,
//! discarding responses that arrive for a locale the viewer already left.

pub mod config;
pub mod content;
pub mod controller;
pub mod document;
pub mod i18n;
pub mod prefs;
pub mod render;
pub mod sections;
pub mod source;
pub mod view;
