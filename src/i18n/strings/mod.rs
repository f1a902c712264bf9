//! Flat per-language string tables.
//!
//! Each table is an ordered list of `(StringName, text)` pairs. Strings are
//! stored raw; `{PLACEHOLDER}` markers are filled in by
//! `StringsCatalog::translate_template`.

mod en_gb;
mod en_us;
mod es;
mod fr;
mod uk;
mod zh_cn;

pub use en_gb::EN_GB_STRINGS;
pub use en_us::EN_US_STRINGS;
pub use es::ES_STRINGS;
pub use fr::FR_STRINGS;
pub use uk::UK_STRINGS;
pub use zh_cn::ZH_CN_STRINGS;

use crate::i18n::{StringLanguage, StringName};
use std::collections::HashSet;

/// All localized strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct StringsCollection {
    language: StringLanguage,
    entries: &'static [(StringName, &'static str)],
}

impl StringsCollection {
    pub const fn new(
        language: StringLanguage,
        entries: &'static [(StringName, &'static str)],
    ) -> Self {
        Self { language, entries }
    }

    /// Shipped table for `language`.
    pub fn for_language(language: StringLanguage) -> Self {
        let entries = match language {
            StringLanguage::EnglishUS => EN_US_STRINGS,
            StringLanguage::EnglishUK => EN_GB_STRINGS,
            StringLanguage::French => FR_STRINGS,
            StringLanguage::MandarinChinese => ZH_CN_STRINGS,
            StringLanguage::Spanish => ES_STRINGS,
            StringLanguage::Ukrainian => UK_STRINGS,
        };
        Self::new(language, entries)
    }

    pub fn language(&self) -> StringLanguage {
        self.language
    }

    /// Text for `name`. When a table lists a name twice, the last entry
    /// wins, matching what `build_nested_i18n` keeps.
    pub fn get(&self, name: StringName) -> Option<&'static str> {
        self.entries
            .iter()
            .rfind(|(entry, _)| *entry == name)
            .map(|(_, text)| *text)
    }

    /// Look up by flat key, which may not correspond to any `StringName`.
    pub fn get_by_key(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .rfind(|(entry, _)| entry.as_str() == key)
            .map(|(_, text)| *text)
    }

    /// `(flat key, text)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(name, text)| (name.as_str(), *text))
    }

    pub fn entries(&self) -> &'static [(StringName, &'static str)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names from `StringName::ALL` that this table does not define.
    pub fn missing_names(&self) -> Vec<StringName> {
        StringName::ALL
            .into_iter()
            .filter(|name| self.get(*name).is_none())
            .collect()
    }

    /// Names listed more than once, in order of their second appearance.
    pub fn duplicate_names(&self) -> Vec<StringName> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for (name, _) in self.entries {
            if !seen.insert(*name) && !duplicates.contains(name) {
                duplicates.push(*name);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Completeness Tests ====================

    #[test]
    fn test_every_shipped_table_is_complete() {
        for language in StringLanguage::ALL {
            let collection = StringsCollection::for_language(language);
            assert!(
                collection.missing_names().is_empty(),
                "{} is missing {:?}",
                language,
                collection.missing_names()
            );
            assert_eq!(collection.len(), StringName::ALL.len(), "{}", language);
        }
    }

    #[test]
    fn test_no_empty_strings() {
        for language in StringLanguage::ALL {
            for (key, text) in StringsCollection::for_language(language).iter() {
                assert!(!text.trim().is_empty(), "{} has empty {}", language, key);
            }
        }
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_english_change_password() {
        let collection = StringsCollection::for_language(StringLanguage::EnglishUS);
        assert_eq!(
            collection.get(StringName::CommonChangePassword),
            Some("Change Password")
        );
    }

    #[test]
    fn test_get_by_key_french() {
        let collection = StringsCollection::for_language(StringLanguage::French);
        assert_eq!(collection.get_by_key("common_cancel"), Some("Annuler"));
        assert_eq!(collection.get_by_key("UnknownName"), None);
    }

    #[test]
    fn test_iter_preserves_table_order() {
        let collection = StringsCollection::for_language(StringLanguage::Spanish);
        let first = collection.iter().next().unwrap();
        assert_eq!(first, ("appTitle", "Chile y Cilantro"));
    }

    #[test]
    fn test_partial_collection_reports_missing() {
        static PARTIAL: &[(StringName, &str)] = &[(StringName::CommonCancel, "Cancel")];
        let collection = StringsCollection::new(StringLanguage::EnglishUS, PARTIAL);
        let missing = collection.missing_names();
        assert_eq!(missing.len(), StringName::ALL.len() - 1);
        assert!(!missing.contains(&StringName::CommonCancel));
    }

    // ==================== Duplicate Tests ====================

    #[test]
    fn test_shipped_tables_have_no_duplicates() {
        for language in StringLanguage::ALL {
            let collection = StringsCollection::for_language(language);
            assert!(
                collection.duplicate_names().is_empty(),
                "{} repeats {:?}",
                language,
                collection.duplicate_names()
            );
        }
    }

    #[test]
    fn test_duplicate_name_last_entry_wins_in_flat_and_nested() {
        static REPEATED: &[(StringName, &str)] = &[
            (StringName::CommonCancel, "Annuler"),
            (StringName::CommonSubmit, "Envoyer"),
            (StringName::CommonCancel, "Quitter"),
            (StringName::CommonCancel, "Fermer"),
        ];
        let collection = StringsCollection::new(StringLanguage::French, REPEATED);

        assert_eq!(collection.duplicate_names(), vec![StringName::CommonCancel]);
        assert_eq!(collection.get(StringName::CommonCancel), Some("Fermer"));
        assert_eq!(collection.get_by_key("common_cancel"), Some("Fermer"));

        let tree = crate::i18n::build_nested_i18n(collection.iter()).unwrap();
        assert_eq!(
            crate::i18n::nested::resolve_path(&tree, "common.cancel"),
            Some("Fermer")
        );
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_bid_template_placeholders() {
        for language in StringLanguage::ALL {
            let text = StringsCollection::for_language(language)
                .get(StringName::GameBidTemplate)
                .unwrap();
            assert!(text.contains("{NAME}"), "{}", language);
            assert!(text.contains("{BID}"), "{}", language);
        }
    }
}
