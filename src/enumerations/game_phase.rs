use super::GameEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Waiting for chefs to join
    Lobby,
    /// Chefs are placing their first cards
    Setup,
    /// Chefs alternate between placing cards and bidding
    Bidding,
    /// The highest bidder flips cards
    Reveal,
    GameOver,
}

impl GameEnum for GamePhase {
    const TYPE_NAME: &'static str = "GamePhase";

    const ALL: &'static [Self] = &[
        GamePhase::Lobby,
        GamePhase::Setup,
        GamePhase::Bidding,
        GamePhase::Reveal,
        GamePhase::GameOver,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Lobby => "LOBBY",
            GamePhase::Setup => "SETUP",
            GamePhase::Bidding => "BIDDING",
            GamePhase::Reveal => "REVEAL",
            GamePhase::GameOver => "GAME_OVER",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
