//! Language identifiers and the current-language context.
//!
//! `StringLanguage` is the closed set of languages every table is keyed by.
//! `LanguageContext` holds the "current" language used when a caller does not
//! pass one explicitly. Prefer a context per request or session; the global
//! instance exists for single-user hosts such as the CLI.

use crate::i18n::registry::{get_language_code, LanguageRegistry};
use crate::i18n::I18nError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// A supported language.
///
/// Serializes to its native display name, which is also the value stored in
/// user preference documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StringLanguage {
    #[serde(rename = "English (US)")]
    EnglishUS,
    #[serde(rename = "English (UK)")]
    EnglishUK,
    #[serde(rename = "Français")]
    French,
    #[serde(rename = "中文")]
    MandarinChinese,
    #[serde(rename = "Español")]
    Spanish,
    #[serde(rename = "Українська")]
    Ukrainian,
}

impl StringLanguage {
    /// Language used when nothing else is configured.
    pub const DEFAULT: StringLanguage = StringLanguage::EnglishUS;

    /// Every supported language, in display order.
    pub const ALL: [StringLanguage; 6] = [
        StringLanguage::EnglishUS,
        StringLanguage::EnglishUK,
        StringLanguage::French,
        StringLanguage::MandarinChinese,
        StringLanguage::Spanish,
        StringLanguage::Ukrainian,
    ];

    /// External locale code (e.g. "en", "en-GB", "zh-CN").
    pub fn code(&self) -> &'static str {
        match self {
            StringLanguage::EnglishUS => "en",
            StringLanguage::EnglishUK => "en-GB",
            StringLanguage::French => "fr",
            StringLanguage::MandarinChinese => "zh-CN",
            StringLanguage::Spanish => "es",
            StringLanguage::Ukrainian => "uk",
        }
    }

    /// Native display name (e.g. "Français").
    pub fn native_name(&self) -> &'static str {
        match self {
            StringLanguage::EnglishUS => "English (US)",
            StringLanguage::EnglishUK => "English (UK)",
            StringLanguage::French => "Français",
            StringLanguage::MandarinChinese => "中文",
            StringLanguage::Spanish => "Español",
            StringLanguage::Ukrainian => "Українська",
        }
    }

    /// English name, as listed in the registry.
    pub fn name(&self) -> &'static str {
        LanguageRegistry::get()
            .get_by_language(*self)
            .map(|config| config.name)
            .unwrap_or_else(|| self.native_name())
    }

    /// Strict reverse lookup of an external locale code.
    ///
    /// # Example
    /// ```
    /// use chili_cilantro_i18n::i18n::StringLanguage;
    ///
    /// assert_eq!(StringLanguage::from_code("fr").unwrap(), StringLanguage::French);
    /// assert!(StringLanguage::from_code("fr-CA").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<StringLanguage, I18nError> {
        get_language_code(Some(code))
    }
}

impl Default for StringLanguage {
    fn default() -> Self {
        StringLanguage::DEFAULT
    }
}

impl fmt::Display for StringLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

/// Holder of the current language.
///
/// Reads and writes go through an `RwLock`, so a context can be shared across
/// threads, but two requests sharing one context will see each other's
/// changes. Give each request or session its own context.
#[derive(Debug)]
pub struct LanguageContext {
    current: RwLock<StringLanguage>,
}

/// Process-wide context (initialized lazily to the default language)
static GLOBAL_CONTEXT: OnceLock<LanguageContext> = OnceLock::new();

impl LanguageContext {
    /// Create a context starting at `language`.
    pub fn new(language: StringLanguage) -> Self {
        Self {
            current: RwLock::new(language),
        }
    }

    /// The process-wide context read by the free `translate` functions.
    pub fn global() -> &'static LanguageContext {
        GLOBAL_CONTEXT.get_or_init(|| LanguageContext::new(StringLanguage::DEFAULT))
    }

    /// Current language of this context.
    pub fn language(&self) -> StringLanguage {
        *self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Change the current language of this context.
    pub fn set_language(&self, language: StringLanguage) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = language;
    }

    /// `explicit` if given, otherwise this context's current language.
    pub fn resolve(&self, explicit: Option<StringLanguage>) -> StringLanguage {
        explicit.unwrap_or_else(|| self.language())
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(StringLanguage::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ==================== StringLanguage Tests ====================

    #[test]
    fn test_default_is_english_us() {
        assert_eq!(StringLanguage::default(), StringLanguage::EnglishUS);
        assert_eq!(StringLanguage::DEFAULT.code(), "en");
    }

    #[test]
    fn test_codes() {
        assert_eq!(StringLanguage::EnglishUK.code(), "en-GB");
        assert_eq!(StringLanguage::MandarinChinese.code(), "zh-CN");
        assert_eq!(StringLanguage::Ukrainian.code(), "uk");
    }

    #[test]
    fn test_from_code_round_trips() {
        for language in StringLanguage::ALL {
            assert_eq!(StringLanguage::from_code(language.code()), Ok(language));
        }
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(StringLanguage::from_code("EN").is_err());
        assert!(StringLanguage::from_code("zh-cn").is_err());
    }

    #[test]
    fn test_display_uses_native_name() {
        assert_eq!(StringLanguage::French.to_string(), "Français");
        assert_eq!(StringLanguage::Spanish.to_string(), "Español");
    }

    #[test]
    fn test_english_name_from_registry() {
        assert_eq!(StringLanguage::MandarinChinese.name(), "Mandarin Chinese");
        assert_eq!(StringLanguage::EnglishUK.name(), "English (UK)");
    }

    #[test]
    fn test_serde_uses_native_name() {
        let json = serde_json::to_string(&StringLanguage::Ukrainian).expect("Should serialize");
        assert_eq!(json, "\"Українська\"");

        let parsed: StringLanguage =
            serde_json::from_str("\"English (UK)\"").expect("Should deserialize");
        assert_eq!(parsed, StringLanguage::EnglishUK);
    }

    // ==================== LanguageContext Tests ====================

    #[test]
    fn test_context_set_and_read() {
        let context = LanguageContext::new(StringLanguage::Spanish);
        assert_eq!(context.language(), StringLanguage::Spanish);

        context.set_language(StringLanguage::French);
        assert_eq!(context.language(), StringLanguage::French);
    }

    #[test]
    fn test_context_resolve_prefers_explicit() {
        let context = LanguageContext::new(StringLanguage::Spanish);
        assert_eq!(
            context.resolve(Some(StringLanguage::Ukrainian)),
            StringLanguage::Ukrainian
        );
        assert_eq!(context.resolve(None), StringLanguage::Spanish);
    }

    #[test]
    fn test_contexts_are_independent() {
        let first = LanguageContext::default();
        let second = LanguageContext::default();
        first.set_language(StringLanguage::MandarinChinese);
        assert_eq!(second.language(), StringLanguage::EnglishUS);
    }

    #[test]
    #[serial]
    fn test_global_context_is_singleton() {
        let a = LanguageContext::global();
        let b = LanguageContext::global();
        assert!(std::ptr::eq(a, b));

        let previous = a.language();
        a.set_language(StringLanguage::EnglishUK);
        assert_eq!(b.language(), StringLanguage::EnglishUK);
        a.set_language(previous);
    }

    #[test]
    fn test_context_survives_poisoned_lock() {
        let context = std::sync::Arc::new(LanguageContext::new(StringLanguage::French));
        let poisoner = std::sync::Arc::clone(&context);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.current.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(context.language(), StringLanguage::French);
        context.set_language(StringLanguage::Spanish);
        assert_eq!(context.language(), StringLanguage::Spanish);
    }
}
