//! Enum translation.
//!
//! Unlike string translation, a missing enum label is a programming error: the
//! lookup fails with an error naming the value, the type and the language, and
//! nothing is logged. The shipped tables are generated from the exhaustive
//! label functions in `enum_labels`, so gaps can only appear in tables built
//! by hand or when the type and value arrive as strings.

use crate::enumerations::{ActionType, CardType, GameEnum, GamePhase, TurnAction};
use crate::i18n::enum_labels::{
    action_type_label, card_type_label, game_phase_label, turn_action_label,
};
use crate::i18n::{I18nError, LanguageContext, StringLanguage, TranslationMetrics};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A game enum value tagged with its type.
///
/// Serializes as `{"type": "ActionType", "value": "PASS"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TranslatableEnum {
    ActionType(ActionType),
    CardType(CardType),
    GamePhase(GamePhase),
    TurnAction(TurnAction),
}

impl TranslatableEnum {
    /// Type tag selecting the translation table.
    pub fn enum_type(&self) -> &'static str {
        match self {
            TranslatableEnum::ActionType(_) => ActionType::TYPE_NAME,
            TranslatableEnum::CardType(_) => CardType::TYPE_NAME,
            TranslatableEnum::GamePhase(_) => GamePhase::TYPE_NAME,
            TranslatableEnum::TurnAction(_) => TurnAction::TYPE_NAME,
        }
    }

    /// Wire value of the wrapped enum.
    pub fn value(&self) -> &'static str {
        match self {
            TranslatableEnum::ActionType(value) => value.as_str(),
            TranslatableEnum::CardType(value) => value.as_str(),
            TranslatableEnum::GamePhase(value) => value.as_str(),
            TranslatableEnum::TurnAction(value) => value.as_str(),
        }
    }

    /// Build a selector from a type tag and wire value.
    pub fn parse(enum_type: &str, value: &str) -> Option<Self> {
        match enum_type {
            t if t == ActionType::TYPE_NAME => ActionType::from_wire(value).map(Self::ActionType),
            t if t == CardType::TYPE_NAME => CardType::from_wire(value).map(Self::CardType),
            t if t == GamePhase::TYPE_NAME => GamePhase::from_wire(value).map(Self::GamePhase),
            t if t == TurnAction::TYPE_NAME => TurnAction::from_wire(value).map(Self::TurnAction),
            _ => None,
        }
    }

    /// Every value of every translatable enum.
    pub fn all() -> Vec<TranslatableEnum> {
        ActionType::ALL
            .iter()
            .copied()
            .map(Self::ActionType)
            .chain(CardType::ALL.iter().copied().map(Self::CardType))
            .chain(GamePhase::ALL.iter().copied().map(Self::GamePhase))
            .chain(TurnAction::ALL.iter().copied().map(Self::TurnAction))
            .collect()
    }
}

impl From<ActionType> for TranslatableEnum {
    fn from(value: ActionType) -> Self {
        TranslatableEnum::ActionType(value)
    }
}

impl From<CardType> for TranslatableEnum {
    fn from(value: CardType) -> Self {
        TranslatableEnum::CardType(value)
    }
}

impl From<GamePhase> for TranslatableEnum {
    fn from(value: GamePhase) -> Self {
        TranslatableEnum::GamePhase(value)
    }
}

impl From<TurnAction> for TranslatableEnum {
    fn from(value: TurnAction) -> Self {
        TranslatableEnum::TurnAction(value)
    }
}

/// Labels for one enum type: language → (wire value → label).
#[derive(Debug, Clone)]
pub struct EnumTranslationTable {
    enum_type: &'static str,
    languages: Vec<(StringLanguage, Vec<(&'static str, &'static str)>)>,
}

impl EnumTranslationTable {
    /// Empty table for `enum_type`.
    pub fn new(enum_type: &'static str) -> Self {
        Self {
            enum_type,
            languages: Vec::new(),
        }
    }

    /// Full language × value table generated from a label function.
    pub fn from_labels<E: GameEnum>(label: fn(E, StringLanguage) -> &'static str) -> Self {
        let languages = StringLanguage::ALL
            .into_iter()
            .map(|language| {
                let labels = E::ALL
                    .iter()
                    .map(|value| (value.as_str(), label(*value, language)))
                    .collect();
                (language, labels)
            })
            .collect();

        Self {
            enum_type: E::TYPE_NAME,
            languages,
        }
    }

    /// Add or replace one label.
    pub fn with_label(
        mut self,
        language: StringLanguage,
        value: &'static str,
        label: &'static str,
    ) -> Self {
        let index = match self.languages.iter().position(|(lang, _)| *lang == language) {
            Some(index) => index,
            None => {
                self.languages.push((language, Vec::new()));
                self.languages.len() - 1
            }
        };

        let labels = &mut self.languages[index].1;
        match labels.iter_mut().find(|(existing, _)| *existing == value) {
            Some(entry) => entry.1 = label,
            None => labels.push((value, label)),
        }
        self
    }

    pub fn enum_type(&self) -> &'static str {
        self.enum_type
    }

    /// Languages this table has labels for.
    pub fn languages(&self) -> Vec<StringLanguage> {
        self.languages.iter().map(|(language, _)| *language).collect()
    }

    pub fn label(&self, language: StringLanguage, value: &str) -> Option<&'static str> {
        self.languages
            .iter()
            .find(|(lang, _)| *lang == language)?
            .1
            .iter()
            .find(|(wire, _)| *wire == value)
            .map(|(_, label)| *label)
    }
}

/// Dispatch table from enum type tag to its translation table.
#[derive(Debug, Clone)]
pub struct EnumTranslations {
    tables: Vec<EnumTranslationTable>,
}

/// Shipped tables (initialized lazily)
static ENUM_TRANSLATIONS: OnceLock<EnumTranslations> = OnceLock::new();

impl EnumTranslations {
    /// Tables for every translatable enum, complete for every language.
    pub fn get() -> &'static EnumTranslations {
        ENUM_TRANSLATIONS.get_or_init(|| {
            EnumTranslations::new(vec![
                EnumTranslationTable::from_labels(action_type_label),
                EnumTranslationTable::from_labels(card_type_label),
                EnumTranslationTable::from_labels(game_phase_label),
                EnumTranslationTable::from_labels(turn_action_label),
            ])
        })
    }

    pub fn new(tables: Vec<EnumTranslationTable>) -> Self {
        Self { tables }
    }

    pub fn table(&self, enum_type: &str) -> Option<&EnumTranslationTable> {
        self.tables
            .iter()
            .find(|table| table.enum_type() == enum_type)
    }

    /// Label for `selector` in `language`.
    ///
    /// # Errors
    /// `EnumTranslationMissing` if the type, the language or the value has
    /// no entry.
    pub fn translate(
        &self,
        selector: TranslatableEnum,
        language: StringLanguage,
    ) -> Result<&'static str, I18nError> {
        self.translate_raw(selector.enum_type(), selector.value(), language)
    }

    /// Label for `selector`, falling back to `context`'s current language.
    pub fn translate_in(
        &self,
        context: &LanguageContext,
        selector: TranslatableEnum,
        language: Option<StringLanguage>,
    ) -> Result<&'static str, I18nError> {
        self.translate(selector, context.resolve(language))
    }

    /// Same lookup as `translate` from a type tag and wire value given as
    /// strings.
    pub fn translate_raw(
        &self,
        enum_type: &str,
        value: &str,
        language: StringLanguage,
    ) -> Result<&'static str, I18nError> {
        let metrics = TranslationMetrics::global();
        metrics.record_enum_lookup();

        self.table(enum_type)
            .and_then(|table| table.label(language, value))
            .ok_or_else(|| {
                metrics.record_enum_failure();
                I18nError::EnumTranslationMissing {
                    value: value.to_string(),
                    enum_type: enum_type.to_string(),
                    language: language.to_string(),
                }
            })
    }

    /// Every (selector, language) pair that has no label.
    pub fn missing_entries(&self) -> Vec<(TranslatableEnum, StringLanguage)> {
        let mut missing = Vec::new();
        for selector in TranslatableEnum::all() {
            for language in StringLanguage::ALL {
                let found = self
                    .table(selector.enum_type())
                    .and_then(|table| table.label(language, selector.value()));
                if found.is_none() {
                    missing.push((selector, language));
                }
            }
        }
        missing
    }
}

/// Translate `selector` with the shipped tables and the global language
/// context.
///
/// # Example
/// ```
/// use chili_cilantro_i18n::enumerations::ActionType;
/// use chili_cilantro_i18n::i18n::{translate_enum, StringLanguage};
///
/// let label = translate_enum(ActionType::Pass.into(), Some(StringLanguage::French)).unwrap();
/// assert_eq!(label, "Passer");
/// ```
pub fn translate_enum(
    selector: TranslatableEnum,
    language: Option<StringLanguage>,
) -> Result<&'static str, I18nError> {
    EnumTranslations::get().translate_in(LanguageContext::global(), selector, language)
}
