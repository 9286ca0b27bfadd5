/// Localized user-facing strings owned by the page itself (not by content).
///
/// Strings are raw; the view layer escapes them when serializing.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    /// Visible toggle label when this locale is the *target* of the next click
    pub toggle_label: &'static str,

    /// Accessible name of the toggle when this locale is the target,
    /// written in the target language
    pub switch_prompt: &'static str,

    /// Message that replaces the content area when loading fails
    pub load_failed: &'static str,
}

/// Japanese strings (default locale)
pub const JAPANESE_STRINGS: LocaleStrings = LocaleStrings {
    toggle_label: "JA",
    switch_prompt: "日本語に切り替え",
    load_failed: "コンテンツの読み込みに失敗しました",
};

/// English strings
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    toggle_label: "EN",
    switch_prompt: "Switch to English",
    load_failed: "Failed to load content",
};

impl LocaleStrings {
    /// Strings for a registry code; unknown codes get the default locale's.
    pub fn for_code(code: &str) -> &'static LocaleStrings {
        match code {
            "en" => &ENGLISH_STRINGS,
            _ => &JAPANESE_STRINGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_labels_are_uppercase_codes() {
        assert_eq!(JAPANESE_STRINGS.toggle_label, "JA");
        assert_eq!(ENGLISH_STRINGS.toggle_label, "EN");
    }

    #[test]
    fn test_switch_prompt_written_in_target_language() {
        assert!(ENGLISH_STRINGS.switch_prompt.contains("English"));
        assert!(JAPANESE_STRINGS.switch_prompt.contains("日本語"));
    }

    #[test]
    fn test_load_failed_not_empty() {
        assert!(!JAPANESE_STRINGS.load_failed.is_empty());
        assert!(!ENGLISH_STRINGS.load_failed.is_empty());
    }

    #[test]
    fn test_for_code() {
        assert_eq!(LocaleStrings::for_code("en").toggle_label, "EN");
        assert_eq!(LocaleStrings::for_code("ja").toggle_label, "JA");
        assert_eq!(LocaleStrings::for_code("xx").toggle_label, "JA");
    }
}
