//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of every language the string
//! and enum tables are written for, plus the mapping between internal
//! `StringLanguage` identifiers and external locale codes. It uses a
//! singleton pattern with `OnceLock` to ensure thread-safe initialization.

use crate::i18n::{I18nError, StringLanguage};
use serde::Serialize;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// Internal identifier
    pub language: StringLanguage,

    /// External locale code (e.g., "en", "en-GB", "zh-CN")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this is the default language (exactly one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its external code.
    ///
    /// # Arguments
    /// * `code` - The locale code (e.g., "en", "zh-CN"); matched exactly
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is known
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by its internal identifier.
    pub fn get_by_language(&self, language: StringLanguage) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.language == language)
    }

    /// Get all languages.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Strict lookup of an external code into its language.
///
/// `None` (absent input), `""` and unrecognized codes each fail with their own
/// error so callers can tell them apart.
///
/// # Example
/// ```
/// use chili_cilantro_i18n::i18n::{get_language_code, StringLanguage};
///
/// assert_eq!(get_language_code(Some("en")).unwrap(), StringLanguage::EnglishUS);
/// assert!(get_language_code(Some("not-a-code")).is_err());
/// ```
pub fn get_language_code(code: Option<&str>) -> Result<StringLanguage, I18nError> {
    let code = code.ok_or(I18nError::MissingLanguageCode)?;
    if code.is_empty() {
        return Err(I18nError::EmptyLanguageCode);
    }

    LanguageRegistry::get()
        .get_by_code(code)
        .map(|config| config.language)
        .ok_or_else(|| I18nError::UnknownLanguageCode(code.to_string()))
}

/// Lenient lookup of an external code into its language.
///
/// Returns `fallback` when the code is not recognized, or the default
/// language when no fallback is given. Never fails.
pub fn language_code_to_string_language(
    code: &str,
    fallback: Option<StringLanguage>,
) -> StringLanguage {
    LanguageRegistry::get()
        .get_by_code(code)
        .map(|config| config.language)
        .unwrap_or_else(|| fallback.unwrap_or(StringLanguage::DEFAULT))
}

/// Default language configurations.
fn default_languages() -> Vec<LanguageConfig> {
    StringLanguage::ALL
        .into_iter()
        .map(|language| LanguageConfig {
            language,
            code: language.code(),
            name: english_name(language),
            native_name: language.native_name(),
            is_default: language == StringLanguage::DEFAULT,
        })
        .collect()
}

fn english_name(language: StringLanguage) -> &'static str {
    match language {
        StringLanguage::EnglishUS => "English (US)",
        StringLanguage::EnglishUK => "English (UK)",
        StringLanguage::French => "French",
        StringLanguage::MandarinChinese => "Mandarin Chinese",
        StringLanguage::Spanish => "Spanish",
        StringLanguage::Ukrainian => "Ukrainian",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Registry Tests ====================

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_list_all_covers_every_language() {
        let all = LanguageRegistry::get().list_all();
        assert_eq!(all.len(), StringLanguage::ALL.len());
        for language in StringLanguage::ALL {
            assert!(all.iter().any(|config| config.language == language));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let all = LanguageRegistry::get().list_all();
        let mut codes: Vec<_> = all.iter().map(|config| config.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_get_by_code_french() {
        let config = LanguageRegistry::get().get_by_code("fr").unwrap();
        assert_eq!(config.language, StringLanguage::French);
        assert_eq!(config.name, "French");
        assert_eq!(config.native_name, "Français");
        assert!(!config.is_default);
    }

    #[test]
    fn test_default_language_is_english_us() {
        let config = LanguageRegistry::get().default_language();
        assert_eq!(config.language, StringLanguage::EnglishUS);
        assert_eq!(config.code, "en");
    }

    // ==================== get_language_code Tests ====================

    #[test]
    fn test_get_language_code_en() {
        assert_eq!(get_language_code(Some("en")), Ok(StringLanguage::EnglishUS));
    }

    #[test]
    fn test_get_language_code_every_code() {
        assert_eq!(get_language_code(Some("en-GB")), Ok(StringLanguage::EnglishUK));
        assert_eq!(get_language_code(Some("fr")), Ok(StringLanguage::French));
        assert_eq!(
            get_language_code(Some("zh-CN")),
            Ok(StringLanguage::MandarinChinese)
        );
        assert_eq!(get_language_code(Some("es")), Ok(StringLanguage::Spanish));
        assert_eq!(get_language_code(Some("uk")), Ok(StringLanguage::Ukrainian));
    }

    #[test]
    fn test_get_language_code_unknown_names_code() {
        let err = get_language_code(Some("not-a-code")).unwrap_err();
        assert_eq!(err, I18nError::UnknownLanguageCode("not-a-code".to_string()));
        assert!(err.to_string().contains("not-a-code"));
    }

    #[test]
    fn test_get_language_code_empty() {
        assert_eq!(get_language_code(Some("")), Err(I18nError::EmptyLanguageCode));
    }

    #[test]
    fn test_get_language_code_missing() {
        assert_eq!(get_language_code(None), Err(I18nError::MissingLanguageCode));
    }

    // ==================== language_code_to_string_language Tests ====================

    #[test]
    fn test_lenient_lookup_known_code() {
        assert_eq!(
            language_code_to_string_language("uk", Some(StringLanguage::French)),
            StringLanguage::Ukrainian
        );
    }

    #[test]
    fn test_lenient_lookup_uses_fallback() {
        assert_eq!(
            language_code_to_string_language("not-a-code", Some(StringLanguage::Spanish)),
            StringLanguage::Spanish
        );
    }

    #[test]
    fn test_lenient_lookup_defaults_without_fallback() {
        assert_eq!(
            language_code_to_string_language("not-a-code", None),
            StringLanguage::EnglishUS
        );
        assert_eq!(
            language_code_to_string_language("", None),
            StringLanguage::EnglishUS
        );
    }

    #[test]
    fn test_language_config_serializes() {
        let config = LanguageRegistry::get().get_by_code("es").unwrap();
        let json = serde_json::to_value(config).expect("Should serialize");
        assert_eq!(json["code"], "es");
        assert_eq!(json["language"], "Español");
        assert_eq!(json["is_default"], false);
    }
}
