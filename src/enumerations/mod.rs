//! Game vocabulary enumerations.
//!
//! These are the enums that travel between the game server and clients and
//! that need a human-readable label in every supported language. Their wire
//! representation (`as_str`, serde) is the SCREAMING_SNAKE_CASE form.

mod action_type;
mod card_type;
mod game_phase;
mod turn_action;

pub use action_type::ActionType;
pub use card_type::CardType;
pub use game_phase::GamePhase;
pub use turn_action::TurnAction;

/// Common surface of every game enum that can be translated.
pub trait GameEnum: Copy + Eq + std::fmt::Debug + 'static {
    /// Type tag used to select the translation table (e.g. "ActionType").
    const TYPE_NAME: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Wire value of this variant.
    fn as_str(&self) -> &'static str;

    /// Parse a wire value back into a variant.
    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}
