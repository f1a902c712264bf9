//! Catalog validation module.
//!
//! Checks the string and enum tables for the problems that the lookup paths
//! would otherwise only surface at runtime: missing tables, missing or
//! repeated names, key conflicts, enum gaps, and translations that lost or
//! gained a `{PLACEHOLDER}`. Run it at startup and in tests.

use crate::i18n::catalog::{placeholders, StringsCatalog};
use crate::i18n::{EnumTranslations, LanguageRegistry};

/// Validation report containing errors and warnings about the catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a lookup fail or fall back
    pub errors: Vec<String>,

    /// Suspicious translations that still resolve
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for string and enum catalogs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate `strings` and `enums` against every registry language.
    ///
    /// Placeholders are compared against the default language's table; if
    /// that table is missing, the placeholder check is skipped.
    pub fn validate(strings: &StringsCatalog, enums: &EnumTranslations) -> ValidationReport {
        let mut report = ValidationReport::new();

        let default_language = LanguageRegistry::get().default_language().language;
        let reference = strings.collection(default_language);

        for config in LanguageRegistry::get().list_all() {
            let language = config.language;
            let Some(collection) = strings.collection(language) else {
                report
                    .errors
                    .push(format!("No strings collection for {} ({})", language, config.code));
                continue;
            };

            let missing = collection.missing_names();
            if !missing.is_empty() {
                report.errors.push(format!(
                    "{} is missing {} strings: {:?}",
                    language,
                    missing.len(),
                    missing.iter().map(|name| name.as_str()).collect::<Vec<_>>()
                ));
            }

            let duplicates = collection.duplicate_names();
            if !duplicates.is_empty() {
                report.errors.push(format!(
                    "{} lists {} strings more than once: {:?}",
                    language,
                    duplicates.len(),
                    duplicates.iter().map(|name| name.as_str()).collect::<Vec<_>>()
                ));
            }

            if let Err(err) = strings.build_nested(language) {
                report.errors.push(format!("{}: {}", language, err));
            }

            for (name, text) in collection.entries() {
                if text.trim().is_empty() {
                    report
                        .warnings
                        .push(format!("{} has an empty translation for {}", language, name));
                }

                if language == default_language {
                    continue;
                }
                let Some(expected) = reference.and_then(|table| table.get(*name)) else {
                    continue;
                };
                let expected = placeholders(expected);
                let actual = placeholders(text);
                if expected != actual {
                    report.warnings.push(format!(
                        "Placeholder mismatch in {} for {}: expected {:?}, found {:?}",
                        language, name, expected, actual
                    ));
                }
            }
        }

        for (selector, language) in enums.missing_entries() {
            report.errors.push(format!(
                "No {} label for {} in {}",
                selector.enum_type(),
                selector.value(),
                language
            ));
        }

        report
    }

    /// Validate the shipped catalogs.
    pub fn validate_shipped() -> ValidationReport {
        Self::validate(StringsCatalog::get(), EnumTranslations::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings::{StringsCollection, EN_US_STRINGS};
    use crate::i18n::{EnumTranslationTable, StringLanguage, StringName};

    fn shipped_collections_except(language: StringLanguage) -> Vec<StringsCollection> {
        StringLanguage::ALL
            .into_iter()
            .filter(|lang| *lang != language)
            .map(StringsCollection::for_language)
            .collect()
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_new_report_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_with_warning_is_not_clean() {
        let mut report = ValidationReport::default();
        report.warnings.push("x".to_string());
        assert!(!report.is_clean());
        assert!(!report.has_errors());
    }

    // ==================== Shipped Catalog Tests ====================

    #[test]
    fn test_shipped_catalogs_are_clean() {
        let report = CatalogValidator::validate_shipped();
        assert!(report.is_clean(), "{:?}", report);
    }

    // ==================== Error Tests ====================

    #[test]
    fn test_missing_language_is_an_error() {
        let strings = StringsCatalog::new(shipped_collections_except(StringLanguage::Ukrainian));
        let report = CatalogValidator::validate(&strings, EnumTranslations::get());

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Українська"));
        assert!(report.errors[0].contains("uk"));
    }

    #[test]
    fn test_missing_names_are_an_error() {
        static PARTIAL: &[(StringName, &str)] = &[(StringName::CommonCancel, "Annuler")];
        let mut collections = shipped_collections_except(StringLanguage::French);
        collections.push(StringsCollection::new(StringLanguage::French, PARTIAL));

        let report =
            CatalogValidator::validate(&StringsCatalog::new(collections), EnumTranslations::get());

        assert!(report.has_errors());
        assert!(report.errors.iter().any(|e| e.contains("Français is missing")));
    }

    #[test]
    fn test_duplicate_names_are_an_error() {
        static REPEATED: &[(StringName, &str)] = &[
            (StringName::CommonCancel, "Annuler"),
            (StringName::CommonCancel, "Quitter"),
        ];
        let mut collections = shipped_collections_except(StringLanguage::French);
        collections.push(StringsCollection::new(StringLanguage::French, REPEATED));
        let strings = StringsCatalog::new(collections);

        let report = CatalogValidator::validate(&strings, EnumTranslations::get());

        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Français lists 1 strings more than once") && e.contains("common_cancel")));

        // Whatever validation says, flat and nested lookups agree
        let tree = strings.build_nested(StringLanguage::French).unwrap();
        assert_eq!(
            strings.translate(StringName::CommonCancel, Some(StringLanguage::French)),
            crate::i18n::nested::resolve_path(&tree, "common.cancel").unwrap()
        );
    }

    #[test]
    fn test_enum_gap_is_an_error() {
        let enums = EnumTranslations::new(vec![EnumTranslationTable::new("CardType")]);
        let report = CatalogValidator::validate(StringsCatalog::get(), &enums);

        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("No ActionType label for PASS in Español")));
    }

    // ==================== Warning Tests ====================

    #[test]
    fn test_placeholder_mismatch_is_a_warning() {
        static BAD_SPANISH: &[(StringName, &str)] = &[(StringName::GameBidTemplate, "{NOMBRE} apuesta {BID}")];
        let collections = vec![
            StringsCollection::new(StringLanguage::EnglishUS, EN_US_STRINGS),
            StringsCollection::new(StringLanguage::Spanish, BAD_SPANISH),
        ];

        let report =
            CatalogValidator::validate(&StringsCatalog::new(collections), EnumTranslations::get());

        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("Placeholder mismatch in Español for game_bidTemplate")));
    }

    #[test]
    fn test_empty_translation_is_a_warning() {
        static EMPTY: &[(StringName, &str)] = &[(StringName::CommonCancel, "  ")];
        let collections = vec![
            StringsCollection::new(StringLanguage::EnglishUS, EN_US_STRINGS),
            StringsCollection::new(StringLanguage::French, EMPTY),
        ];

        let report =
            CatalogValidator::validate(&StringsCatalog::new(collections), EnumTranslations::get());

        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("Français has an empty translation for common_cancel")));
    }
}
