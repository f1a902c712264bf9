use crate::i18n::{get_language_code, StringLanguage};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Language
    pub default_language: StringLanguage,

    // Export
    pub export_dir: String,
    pub pretty_json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Language - external code such as "en" or "zh-CN"; unknown codes are fatal
            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(code) => get_language_code(Some(code.trim()))
                    .context("DEFAULT_LANGUAGE is not a supported language code")?,
                Err(_) => StringLanguage::DEFAULT,
            },

            // Export
            export_dir: std::env::var("I18N_EXPORT_DIR").unwrap_or_else(|_| "./i18n".to_string()),
            pretty_json: std::env::var("I18N_PRETTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("DEFAULT_LANGUAGE");
        std::env::remove_var("I18N_EXPORT_DIR");
        std::env::remove_var("I18N_PRETTY");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load");
        assert_eq!(config.default_language, StringLanguage::EnglishUS);
        assert_eq!(config.export_dir, "./i18n");
        assert!(config.pretty_json);
    }

    #[test]
    #[serial]
    fn test_reads_language_and_export_settings() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "zh-CN");
        std::env::set_var("I18N_EXPORT_DIR", "/tmp/strings");
        std::env::set_var("I18N_PRETTY", "false");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.default_language, StringLanguage::MandarinChinese);
        assert_eq!(config.export_dir, "/tmp/strings");
        assert!(!config.pretty_json);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unknown_language_is_fatal() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "klingon");

        let err = Config::from_env().unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown language code: 'klingon'"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_pretty_flag_falls_back_to_true() {
        clear_env();
        std::env::set_var("I18N_PRETTY", "sometimes");

        let config = Config::from_env().expect("Should load");
        assert!(config.pretty_json);

        clear_env();
    }
}
