use serde::{Deserialize, Serialize};

use crate::card::{Card, CardColor};

/// Move available to the player whose turn it is.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play a held card. Wild cards may carry a chosen color.
    Play(Card),
    /// Draw one card from the deck.
    Draw,
    /// End the turn after drawing a playable card.
    Pass,
    /// Name the color of a wild card that is waiting for one.
    ChooseColor(CardColor),
}

impl Action {
    /// Returns the card if the action is a play.
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::Play(card) => Some(*card),
            _ => None,
        }
    }
}
