//! UNO rules engine: dealing, turn order, card legality, special-card effects and scoring,
//! with pluggable strategies for automated players.

pub mod action;
pub mod api;
pub mod card;
pub mod deck;
pub mod effect;
pub mod error;
pub mod events;
pub mod game;
pub mod logging;
pub mod player;
pub mod score;
pub mod state;
pub mod strategies;
pub mod strategy;

pub use crate::action::Action;
pub use crate::api::{GameRequest, GameResponse, LocalGameApi};
pub use crate::card::{Card, CardColor, CardKind};
pub use crate::deck::{
    Deck, DeckFactory, DeckVariant, FixedDeckFactory, QuickDeckFactory, StandardDeckFactory,
    WildHeavyDeckFactory,
};
pub use crate::effect::{EffectStatus, TurnControl};
pub use crate::error::{GameError, InvalidAction};
pub use crate::events::{EventBus, EventKind, EventRecorder, GameEvent, GameListener, ListenerId};
pub use crate::game::{Game, GameBuilder, PlayOutcome};
pub use crate::logging::{EventLogger, describe_event};
pub use crate::player::Player;
pub use crate::score::{hand_points, round_score};
pub use crate::state::{Direction, GameConfig, GamePhase, GameStateView, PlayerId, PlayerView};
pub use crate::strategies::{CpuStrategy, RandomStrategy, create_player_from_spec};
pub use crate::strategy::Strategy;
