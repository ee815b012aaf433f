use std::fmt;

use crate::card::{Card, CardColor};
use crate::score::hand_points;
use crate::strategy::Strategy;

/// A seat at the table: name, hand, pending forfeits and an optional move strategy.
///
/// Players without a strategy are controlled from outside the engine (humans).
pub struct Player {
    name: String,
    hand: Vec<Card>,
    skipped_turns: u32,
    automated: bool,
    strategy: Option<Box<dyn Strategy>>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Option<Box<dyn Strategy>>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            skipped_turns: 0,
            automated: strategy.is_some(),
            strategy,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    pub fn automated(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self::new(name, Some(strategy))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    pub fn is_automated(&self) -> bool {
        self.automated
    }

    pub(crate) fn take_strategy(&mut self) -> Option<Box<dyn Strategy>> {
        self.strategy.take()
    }

    pub(crate) fn restore_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = Some(strategy);
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// First card in hand order that may be played on `top`.
    pub fn find_playable_card(&self, top: &Card) -> Option<&Card> {
        self.hand.iter().find(|card| card.can_play_on(top))
    }

    pub fn has_playable_card(&self, top: &Card) -> bool {
        self.find_playable_card(top).is_some()
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.hand.iter().any(|held| held.same_face(card))
    }

    /// Removes and returns the first held card with the same color and kind as `card`.
    pub fn play_card(&mut self, card: &Card) -> Option<Card> {
        let index = self.hand.iter().position(|held| held.same_face(card))?;
        Some(self.hand.remove(index))
    }

    /// Color to name when playing a wild: the most common suit in hand.
    pub fn choose_color(&self) -> CardColor {
        most_common_color(&self.hand)
    }

    pub fn has_uno(&self) -> bool {
        self.hand.len() == 1
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn hand_score(&self) -> u32 {
        hand_points(&self.hand)
    }

    pub fn skipped_turns(&self) -> u32 {
        self.skipped_turns
    }

    pub fn add_skipped_turns(&mut self, turns: u32) {
        self.skipped_turns = self.skipped_turns.saturating_add(turns);
    }

    /// Uses up one pending forfeit. Returns false when none was pending.
    pub fn consume_skipped_turn(&mut self) -> bool {
        if self.skipped_turns == 0 {
            return false;
        }
        self.skipped_turns -= 1;
        true
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.skipped_turns = 0;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("skipped_turns", &self.skipped_turns)
            .field("automated", &self.automated)
            .finish()
    }
}

/// Most frequent suit among the colored cards of `hand`.
///
/// Ties go to the earlier suit in `CardColor::SUITS`; red when no colored card is held.
pub fn most_common_color(hand: &[Card]) -> CardColor {
    let mut counts = [0usize; 4];
    for card in hand {
        if let Some(slot) = CardColor::SUITS
            .iter()
            .position(|suit| *suit == card.base_color())
        {
            counts[slot] += 1;
        }
    }
    let mut best = CardColor::Red;
    let mut best_count = 0;
    for (suit, count) in CardColor::SUITS.iter().zip(counts) {
        if count > best_count {
            best = *suit;
            best_count = count;
        }
    }
    best
}
