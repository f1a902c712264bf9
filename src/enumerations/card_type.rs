use super::GameEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two faces a card can show. A flipped chili ends the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Chili,
    Cilantro,
}

impl GameEnum for CardType {
    const TYPE_NAME: &'static str = "CardType";

    const ALL: &'static [Self] = &[CardType::Chili, CardType::Cilantro];

    fn as_str(&self) -> &'static str {
        match self {
            CardType::Chili => "CHILI",
            CardType::Cilantro => "CILANTRO",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
