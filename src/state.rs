use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::DeckVariant;
use crate::error::GameError;

/// Zero-based seat index of a player.
pub type PlayerId = usize;

pub const MIN_PLAYERS: usize = 2;
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Direction of play around the table.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// +1 or -1.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Seat reached from `seat` by one step in this direction.
    pub fn next_seat(self, seat: PlayerId, seats: usize) -> PlayerId {
        let seats = seats as isize;
        (seat as isize + self.step()).rem_euclid(seats) as PlayerId
    }
}

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    /// A human played a wild card; the turn is held until a color is supplied.
    AwaitingColorChoice { player: PlayerId },
    Ended { winner: PlayerId, score: u32 },
}

/// Settings for a game instance.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub hand_size: usize,
    pub seed: u64,
    pub variant: DeckVariant,
}

impl GameConfig {
    pub fn new(hand_size: usize, seed: u64, variant: DeckVariant) -> Result<Self, GameError> {
        if hand_size == 0 {
            return Err(GameError::InvalidConfiguration("hand size must be positive"));
        }
        Ok(Self {
            hand_size,
            seed,
            variant,
        })
    }
}

/// Snapshot of one seat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub skipped_turns: u32,
    pub automated: bool,
    pub is_current: bool,
}

/// Snapshot of the whole table for presentation layers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub phase: GamePhase,
    pub players: Vec<PlayerView>,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub top_card: Option<Card>,
    pub winner: Option<PlayerId>,
    pub score: Option<u32>,
    pub game_over: bool,
    pub turn: u64,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
}
