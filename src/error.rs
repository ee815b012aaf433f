use thiserror::Error;

use crate::card::Card;
use crate::state::PlayerId;

/// Errors raised by misuse of the engine lifecycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("at least {required} players are required, found {found}")]
    NotEnoughPlayers { required: usize, found: usize },
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("action rejected: {0}")]
    Rejected(#[from] InvalidAction),
}

/// Reasons a play, draw or pass was refused. These never end the round.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("no round is in progress")]
    GameNotInProgress,
    #[error("waiting for a wild color to be chosen")]
    AwaitingColorChoice,
    #[error("there is no card on the discard pile")]
    NoTopCard,
    #[error("{card} cannot be played on {top}")]
    IllegalCard { card: Card, top: Card },
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("player already drew a card this turn")]
    AlreadyDrew,
    #[error("a turn can only be passed after drawing a playable card")]
    NothingToPass,
}
