use super::GameEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Choices available to the chef whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnAction {
    PlaceCard,
    Bid,
    IncreaseBid,
    Pass,
    Flip,
}

impl GameEnum for TurnAction {
    const TYPE_NAME: &'static str = "TurnAction";

    const ALL: &'static [Self] = &[
        TurnAction::PlaceCard,
        TurnAction::Bid,
        TurnAction::IncreaseBid,
        TurnAction::Pass,
        TurnAction::Flip,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TurnAction::PlaceCard => "PLACE_CARD",
            TurnAction::Bid => "BID",
            TurnAction::IncreaseBid => "INCREASE_BID",
            TurnAction::Pass => "PASS",
            TurnAction::Flip => "FLIP",
        }
    }
}

impl fmt::Display for TurnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
