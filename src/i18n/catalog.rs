//! String translation.
//!
//! Lookups here never fail. A missing language or a missing string logs a
//! warning and returns the requested name, so the UI shows the raw key instead
//! of crashing.

use crate::i18n::nested::{build_nested_i18n, NestedI18n};
use crate::i18n::strings::StringsCollection;
use crate::i18n::{I18nError, LanguageContext, LanguageRegistry, StringLanguage, TranslationMetrics};
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::warn;

/// A set of per-language string tables.
#[derive(Debug, Clone)]
pub struct StringsCatalog {
    collections: Vec<StringsCollection>,
}

/// Shipped catalog (initialized lazily)
static CATALOG: OnceLock<StringsCatalog> = OnceLock::new();

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl StringsCatalog {
    /// Catalog with every shipped language.
    pub fn get() -> &'static StringsCatalog {
        CATALOG.get_or_init(|| {
            StringsCatalog::new(
                StringLanguage::ALL
                    .into_iter()
                    .map(StringsCollection::for_language)
                    .collect(),
            )
        })
    }

    /// Catalog over an explicit set of collections. If two collections share
    /// a language, the first one is used.
    pub fn new(collections: Vec<StringsCollection>) -> Self {
        Self { collections }
    }

    pub fn collection(&self, language: StringLanguage) -> Option<&StringsCollection> {
        self.collections
            .iter()
            .find(|collection| collection.language() == language)
    }

    /// Languages that have a collection, in catalog order.
    pub fn languages(&self) -> Vec<StringLanguage> {
        self.collections
            .iter()
            .map(|collection| collection.language())
            .collect()
    }

    /// Nested tree for `language`.
    ///
    /// # Errors
    /// * `MissingStringsCollection` if this catalog has no table for `language`
    /// * any key conflict from `build_nested_i18n`
    pub fn build_nested(&self, language: StringLanguage) -> Result<NestedI18n, I18nError> {
        let collection =
            self.collection(language)
                .ok_or_else(|| I18nError::MissingStringsCollection {
                    language: language.to_string(),
                })?;
        build_nested_i18n(collection.iter())
    }

    /// Translate `name` into `language`, or into the global context's
    /// current language when `language` is `None`.
    pub fn translate(&self, name: impl AsRef<str>, language: Option<StringLanguage>) -> String {
        self.translate_in(LanguageContext::global(), name, language)
    }

    /// Translate using `context` for the current language.
    pub fn translate_in(
        &self,
        context: &LanguageContext,
        name: impl AsRef<str>,
        language: Option<StringLanguage>,
    ) -> String {
        self.lookup(name.as_ref(), context.resolve(language))
    }

    /// Translate into the language identified by an external code.
    ///
    /// Unrecognized codes are treated like a missing language.
    pub fn translate_with_code(&self, name: impl AsRef<str>, code: &str) -> String {
        let name = name.as_ref();
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => self.lookup(name, config.language),
            None => {
                TranslationMetrics::global().record_string_lookup();
                TranslationMetrics::global().record_missing_language();
                warn!("Unknown language code '{}' while translating {}", code, name);
                name.to_string()
            }
        }
    }

    /// Translate, then fill `{PLACEHOLDER}` markers from `vars`.
    ///
    /// Markers without a matching variable are left as they are.
    pub fn translate_template(
        &self,
        name: impl AsRef<str>,
        vars: &[(&str, &str)],
        language: Option<StringLanguage>,
    ) -> String {
        fill_template(&self.translate(name, language), vars)
    }

    fn lookup(&self, name: &str, language: StringLanguage) -> String {
        let metrics = TranslationMetrics::global();
        metrics.record_string_lookup();

        let Some(collection) = self.collection(language) else {
            metrics.record_missing_language();
            warn!("Language not found: {} while translating {}", language, name);
            return name.to_string();
        };

        match collection.get_by_key(name) {
            Some(text) => text.to_string(),
            None => {
                metrics.record_missing_key();
                warn!("String not found: {} for language {}", name, language);
                name.to_string()
            }
        }
    }
}

/// Translate with the shipped catalog and the global language context.
///
/// # Example
/// ```
/// use chili_cilantro_i18n::i18n::{translate, StringLanguage, StringName};
///
/// let label = translate(StringName::CommonCancel, Some(StringLanguage::Spanish));
/// assert_eq!(label, "Cancelar");
/// assert_eq!(translate("UnknownName", Some(StringLanguage::Spanish)), "UnknownName");
/// ```
pub fn translate(name: impl AsRef<str>, language: Option<StringLanguage>) -> String {
    StringsCatalog::get().translate(name, language)
}

/// `translate` followed by placeholder substitution.
pub fn translate_template(
    name: impl AsRef<str>,
    vars: &[(&str, &str)],
    language: Option<StringLanguage>,
) -> String {
    StringsCatalog::get().translate_template(name, vars, language)
}

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Z][A-Z0-9_]*)\}").unwrap())
}

/// Names of the `{PLACEHOLDER}` markers in `text`.
pub fn placeholders(text: &str) -> BTreeSet<&str> {
    placeholder_regex()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}

/// Replace `{NAME}` markers with values from `vars`.
pub fn fill_template(text: &str, vars: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(text, |caps: &Captures| {
            let marker = &caps[1];
            vars.iter()
                .find(|(name, _)| *name == marker)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
