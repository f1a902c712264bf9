use super::GameEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Actions recorded in a game's history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    CreateGame,
    EndGame,
    EndRound,
    ExpireGame,
    FlipCard,
    JoinGame,
    MakeBid,
    Message,
    Pass,
    PlaceCard,
    QuitGame,
    StartBidding,
    StartGame,
    StartNewRound,
}

impl GameEnum for ActionType {
    const TYPE_NAME: &'static str = "ActionType";

    const ALL: &'static [Self] = &[
        ActionType::CreateGame,
        ActionType::EndGame,
        ActionType::EndRound,
        ActionType::ExpireGame,
        ActionType::FlipCard,
        ActionType::JoinGame,
        ActionType::MakeBid,
        ActionType::Message,
        ActionType::Pass,
        ActionType::PlaceCard,
        ActionType::QuitGame,
        ActionType::StartBidding,
        ActionType::StartGame,
        ActionType::StartNewRound,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ActionType::CreateGame => "CREATE_GAME",
            ActionType::EndGame => "END_GAME",
            ActionType::EndRound => "END_ROUND",
            ActionType::ExpireGame => "EXPIRE_GAME",
            ActionType::FlipCard => "FLIP_CARD",
            ActionType::JoinGame => "JOIN_GAME",
            ActionType::MakeBid => "MAKE_BID",
            ActionType::Message => "MESSAGE",
            ActionType::Pass => "PASS",
            ActionType::PlaceCard => "PLACE_CARD",
            ActionType::QuitGame => "QUIT_GAME",
            ActionType::StartBidding => "START_BIDDING",
            ActionType::StartGame => "START_GAME",
            ActionType::StartNewRound => "START_NEW_ROUND",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_wire_value() {
        for action in ActionType::ALL {
            let json = serde_json::to_string(action).expect("Should serialize");
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn test_deserialize_start_new_round() {
        let action: ActionType =
            serde_json::from_str("\"START_NEW_ROUND\"").expect("Should deserialize");
        assert_eq!(action, ActionType::StartNewRound);
    }
}
