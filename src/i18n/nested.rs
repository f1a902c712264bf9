//! Flat key tables to nested trees.
//!
//! UI i18n frameworks want `{"common": {"changePassword": "..."}}` rather than
//! `{"common_changePassword": "..."}`. `build_nested_i18n` splits every key on
//! every underscore to produce that shape.
//!
//! `string_name_to_i18n_key` only rewrites the *first* underscore. The two
//! agree for every shipped key (each has at most one underscore) but diverge
//! for deeper keys; callers depend on both behaviors as they are.

use crate::i18n::catalog::StringsCatalog;
use crate::i18n::{I18nError, StringLanguage, StringName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between path segments in flat keys.
pub const KEY_SEPARATOR: char = '_';

/// Separator used by dotted i18n paths.
pub const PATH_SEPARATOR: char = '.';

/// A nested translation tree.
pub type NestedI18n = BTreeMap<String, NestedI18nNode>;

/// One node of a nested translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedI18nNode {
    Leaf(String),
    Branch(NestedI18n),
}

impl NestedI18nNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            NestedI18nNode::Leaf(text) => Some(text),
            NestedI18nNode::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&NestedI18n> {
        match self {
            NestedI18nNode::Leaf(_) => None,
            NestedI18nNode::Branch(children) => Some(children),
        }
    }
}

/// Build a nested tree from flat `(key, text)` pairs.
///
/// Pairs are processed in iteration order. A later duplicate key overwrites
/// the earlier leaf. Which conflict error is reported for a clashing pair of
/// keys depends on which of the two comes first.
///
/// # Errors
/// * `KeyAssignedValueAndObject` if a key descends through an existing leaf
/// * `KeyUsedAsObject` if a key's last segment is already a branch
///
/// # Example
/// ```
/// use chili_cilantro_i18n::i18n::build_nested_i18n;
///
/// let tree = build_nested_i18n([("common_cancel", "Cancel")]).unwrap();
/// let common = tree["common"].as_branch().unwrap();
/// assert_eq!(common["cancel"].as_leaf(), Some("Cancel"));
/// ```
pub fn build_nested_i18n<I, K, V>(entries: I) -> Result<NestedI18n, I18nError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut root = NestedI18n::new();

    for (key, value) in entries {
        let key = key.as_ref();
        let mut segments: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        // split always yields at least one segment
        let last = segments.pop().unwrap_or_default();

        let mut current = &mut root;
        for segment in segments {
            current = match current
                .entry(segment.to_string())
                .or_insert_with(|| NestedI18nNode::Branch(NestedI18n::new()))
            {
                NestedI18nNode::Branch(children) => children,
                NestedI18nNode::Leaf(_) => {
                    return Err(I18nError::KeyAssignedValueAndObject {
                        key: key.to_string(),
                    })
                }
            };
        }

        if let Some(NestedI18nNode::Branch(_)) = current.get(last) {
            return Err(I18nError::KeyUsedAsObject {
                key: key.to_string(),
            });
        }
        current.insert(
            last.to_string(),
            NestedI18nNode::Leaf(value.as_ref().to_string()),
        );
    }

    Ok(root)
}

/// Nested tree for `language` from the shipped catalog.
pub fn build_nested_i18n_for_language(language: StringLanguage) -> Result<NestedI18n, I18nError> {
    StringsCatalog::get().build_nested(language)
}

/// Dotted i18n key for a string name: the first underscore becomes a dot.
///
/// # Example
/// ```
/// use chili_cilantro_i18n::i18n::{string_name_to_i18n_key, StringName};
///
/// assert_eq!(
///     string_name_to_i18n_key(StringName::CommonChangePassword),
///     "common.changePassword"
/// );
/// ```
pub fn string_name_to_i18n_key(name: StringName) -> String {
    i18n_key_from_str(name.as_str())
}

/// Same as `string_name_to_i18n_key` for a raw flat key.
pub fn i18n_key_from_str(key: &str) -> String {
    key.replacen(KEY_SEPARATOR, &PATH_SEPARATOR.to_string(), 1)
}

/// Follow a dotted path down a nested tree to a leaf.
pub fn resolve_path<'a>(tree: &'a NestedI18n, path: &str) -> Option<&'a str> {
    let mut segments = path.split(PATH_SEPARATOR).peekable();
    let mut current = tree;

    while let Some(segment) = segments.next() {
        let node = current.get(segment)?;
        if segments.peek().is_none() {
            return node.as_leaf();
        }
        current = node.as_branch()?;
    }

    None
}
