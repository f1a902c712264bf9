//! Errors raised by the hard-fail lookup paths.
//!
//! String translation never returns these; it logs and falls back to the key.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// A key's final segment landed on a node that already has children.
    #[error("Key conflict detected: {key} is already used as an object")]
    KeyUsedAsObject { key: String },

    /// A key needs to descend through a segment that already holds a string.
    #[error("Key conflict detected: {key} is assigned both a value and an object")]
    KeyAssignedValueAndObject { key: String },

    #[error("No strings collection found for language: {language}")]
    MissingStringsCollection { language: String },

    #[error(
        "Enum translation missing for value '{value}' of type '{enum_type}' in language '{language}'"
    )]
    EnumTranslationMissing {
        value: String,
        enum_type: String,
        language: String,
    },

    #[error("Unknown language code: '{0}'")]
    UnknownLanguageCode(String),

    #[error("Language code is empty")]
    EmptyLanguageCode,

    #[error("Language code is missing")]
    MissingLanguageCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_messages() {
        let used = I18nError::KeyUsedAsObject {
            key: "common_title".to_string(),
        };
        assert_eq!(
            used.to_string(),
            "Key conflict detected: common_title is already used as an object"
        );

        let both = I18nError::KeyAssignedValueAndObject {
            key: "a_b".to_string(),
        };
        assert!(both.to_string().contains("is assigned both a value and an object"));
    }

    #[test]
    fn test_language_code_messages_are_distinguishable() {
        let unknown = I18nError::UnknownLanguageCode("xx".to_string()).to_string();
        let empty = I18nError::EmptyLanguageCode.to_string();
        let missing = I18nError::MissingLanguageCode.to_string();

        assert_ne!(unknown, empty);
        assert_ne!(empty, missing);
        assert_ne!(unknown, missing);
        assert!(unknown.contains("'xx'"));
    }
}
