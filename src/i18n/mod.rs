//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic, localized strings, and translation lookups
//! for the game live here.
//!
//! # Architecture
//!
//! - `language`: `StringLanguage` identifiers and the current-language context
//! - `registry`: Language metadata and external code mapping
//! - `strings`: Flat per-language string tables
//! - `nested`: Flat tables to nested trees for UI i18n frameworks
//! - `catalog`: String translation (soft-fail: warns and returns the key)
//! - `enum_translations`: Enum label translation (hard-fail: returns an error)
//! - `validator`: Startup validation of every table
//! - `metrics`: Lookup and fallback counters
//! - `export`: Nested JSON files per language
//!
//! # Example
//!
//! ```rust
//! use chili_cilantro_i18n::enumerations::TurnAction;
//! use chili_cilantro_i18n::i18n::{
//!     get_language_code, translate, translate_enum, LanguageContext, StringName,
//! };
//!
//! // Per-request context, language picked from the request's locale code
//! let language = get_language_code(Some("es")).unwrap();
//! let context = LanguageContext::new(language);
//!
//! assert_eq!(translate(StringName::CommonCancel, Some(context.language())), "Cancelar");
//! assert_eq!(translate_enum(TurnAction::Pass.into(), Some(language)).unwrap(), "Pasar");
//! ```

pub mod catalog;
mod enum_labels;
mod enum_translations;
mod error;
pub mod export;
mod language;
mod metrics;
pub mod nested;
mod registry;
mod string_names;
pub mod strings;
mod validator;

pub use catalog::{translate, translate_template, StringsCatalog};
pub use enum_translations::{
    translate_enum, EnumTranslationTable, EnumTranslations, TranslatableEnum,
};
pub use error::I18nError;
pub use language::{LanguageContext, StringLanguage};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use nested::{
    build_nested_i18n, build_nested_i18n_for_language, string_name_to_i18n_key, NestedI18n,
    NestedI18nNode,
};
pub use registry::{
    get_language_code, language_code_to_string_language, LanguageConfig, LanguageRegistry,
};
pub use string_names::StringName;
pub use strings::StringsCollection;
pub use validator::{CatalogValidator, ValidationReport};
