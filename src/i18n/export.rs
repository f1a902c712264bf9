//! Nested JSON export for UI i18n frameworks.

use crate::i18n::catalog::StringsCatalog;
use crate::i18n::{LanguageRegistry, StringLanguage};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Nested tree for `language` rendered as JSON.
pub fn nested_json(catalog: &StringsCatalog, language: StringLanguage, pretty: bool) -> Result<String> {
    let tree = catalog.build_nested(language)?;
    let json = if pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    };
    json.with_context(|| format!("Failed to serialize nested strings for {}", language))
}

/// Write `<code>.json` for every registry language into `dir`.
///
/// Creates `dir` if needed and returns the written paths in registry order.
pub fn write_nested_catalogs(catalog: &StringsCatalog, dir: &Path, pretty: bool) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let mut written = Vec::new();
    for config in LanguageRegistry::get().list_all() {
        let json = nested_json(catalog, config.language, pretty)?;
        let path = dir.join(format!("{}.json", config.code));
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} strings to {}", config.language, path.display());
        written.push(path);
    }

    info!("Exported {} languages to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::nested::{resolve_path, NestedI18n};
    use tempfile::TempDir;

    #[test]
    fn test_nested_json_pretty_and_compact() {
        let catalog = StringsCatalog::get();
        let pretty = nested_json(catalog, StringLanguage::EnglishUS, true).unwrap();
        let compact = nested_json(catalog, StringLanguage::EnglishUS, false).unwrap();

        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["common"]["changePassword"], "Change Password");
    }

    #[test]
    fn test_nested_json_missing_language() {
        let catalog = StringsCatalog::new(Vec::new());
        let err = nested_json(&catalog, StringLanguage::French, true).unwrap_err();
        assert!(err.to_string().contains("No strings collection found"));
    }

    #[test]
    fn test_write_nested_catalogs() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let out = temp_dir.path().join("i18n");

        let written = write_nested_catalogs(StringsCatalog::get(), &out, true).unwrap();

        assert_eq!(written.len(), StringLanguage::ALL.len());
        assert!(out.join("en.json").exists());
        assert!(out.join("zh-CN.json").exists());

        let content = std::fs::read_to_string(out.join("uk.json")).unwrap();
        let tree: NestedI18n = serde_json::from_str(&content).expect("Should deserialize");
        assert_eq!(resolve_path(&tree, "common.cancel"), Some("Скасувати"));
    }
}
