use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardColor, MAX_NUMBER};

pub const STANDARD_DECK_SIZE: usize = 108;
pub const QUICK_DECK_SIZE: usize = 40;
pub const WILD_HEAVY_DECK_SIZE: usize = 56;

/// Draw pile, discard pile and the single exposed top card.
///
/// The top card is never inside either pile, so it can not be recycled
/// until another card buries it.
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    top_card: Option<Card>,
    rng: StdRng,
}

impl Deck {
    /// Builds a deck from `cards` and shuffles it once.
    pub fn new(cards: Vec<Card>, rng: StdRng) -> Self {
        let mut deck = Self::stacked(cards, rng);
        deck.shuffle();
        deck
    }

    /// Builds a deck that keeps the given order. The last card is drawn first.
    pub fn stacked(cards: Vec<Card>, rng: StdRng) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            top_card: None,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.draw_pile.shuffle(&mut self.rng);
    }

    /// Takes one card, recycling the discard pile first when the draw pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.recycle_discard_pile();
        }
        self.draw_pile.pop()
    }

    /// Draws up to `count` cards, stopping early once nothing is left.
    pub fn draw_multiple(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Makes `card` the new top card, burying the previous one in the discard pile.
    pub fn discard(&mut self, card: Card) {
        if let Some(mut previous) = self.top_card.replace(card) {
            previous.reset_color();
            self.discard_pile.push(previous);
        }
    }

    pub fn top_card(&self) -> Option<Card> {
        self.top_card
    }

    pub(crate) fn top_card_mut(&mut self) -> Option<&mut Card> {
        self.top_card.as_mut()
    }

    /// Cards left in the draw pile.
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Every card the deck currently holds, top card included.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + usize::from(self.top_card.is_some())
    }

    fn recycle_discard_pile(&mut self) {
        if self.discard_pile.is_empty() {
            return;
        }
        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle();
    }
}

/// Recipe for a round's deck. Factories differ only in the cards they assemble.
pub trait DeckFactory {
    fn recipe(&self) -> Vec<Card>;

    fn create_deck(&self, seed: u64) -> Deck {
        Deck::new(self.recipe(), StdRng::seed_from_u64(seed))
    }
}

/// Standard 108-card deck: per color one 0, two of each 1-9 and two of each action card,
/// plus four Wild and four Wild Draw Four.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardDeckFactory {
    skip_two: bool,
}

impl StandardDeckFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one Skip Two card per color.
    pub fn with_skip_two() -> Self {
        Self { skip_two: true }
    }
}

impl DeckFactory for StandardDeckFactory {
    fn recipe(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE + 4);
        for color in CardColor::SUITS {
            cards.push(Card::number(color, 0));
            for value in 1..=MAX_NUMBER {
                cards.push(Card::number(color, value));
                cards.push(Card::number(color, value));
            }
            for _ in 0..2 {
                cards.push(Card::skip(color));
                cards.push(Card::reverse(color));
                cards.push(Card::draw_two(color));
            }
            if self.skip_two {
                cards.push(Card::skip_two(color));
            }
        }
        for _ in 0..4 {
            cards.push(Card::wild());
            cards.push(Card::wild_draw_four());
        }
        cards
    }
}

/// Reduced 40-card deck for short rounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickDeckFactory;

impl DeckFactory for QuickDeckFactory {
    fn recipe(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(QUICK_DECK_SIZE);
        for color in CardColor::SUITS {
            for value in 0..=5 {
                cards.push(Card::number(color, value));
            }
            cards.push(Card::skip(color));
            cards.push(Card::reverse(color));
            cards.push(Card::draw_two(color));
        }
        for _ in 0..2 {
            cards.push(Card::wild());
            cards.push(Card::wild_draw_four());
        }
        cards
    }
}

/// Novelty deck made mostly of wild cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct WildHeavyDeckFactory;

impl DeckFactory for WildHeavyDeckFactory {
    fn recipe(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(WILD_HEAVY_DECK_SIZE);
        for _ in 0..20 {
            cards.push(Card::wild());
            cards.push(Card::wild_draw_four());
        }
        for color in CardColor::SUITS {
            for _ in 0..2 {
                cards.push(Card::number(color, 0));
                cards.push(Card::number(color, 1));
            }
        }
        cards
    }
}

/// Deterministic deck for tests and scripted setups; never shuffled at construction.
#[derive(Clone, Debug)]
pub struct FixedDeckFactory {
    cards: Vec<Card>,
}

impl FixedDeckFactory {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl DeckFactory for FixedDeckFactory {
    fn recipe(&self) -> Vec<Card> {
        self.cards.clone()
    }

    fn create_deck(&self, seed: u64) -> Deck {
        Deck::stacked(self.recipe(), StdRng::seed_from_u64(seed))
    }
}

/// Named deck recipes selectable from configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum DeckVariant {
    #[default]
    Standard,
    StandardWithSkipTwo,
    Quick,
    WildHeavy,
}

impl DeckVariant {
    pub fn factory(self) -> Box<dyn DeckFactory> {
        match self {
            DeckVariant::Standard => Box::new(StandardDeckFactory::new()),
            DeckVariant::StandardWithSkipTwo => Box::new(StandardDeckFactory::with_skip_two()),
            DeckVariant::Quick => Box::new(QuickDeckFactory),
            DeckVariant::WildHeavy => Box::new(WildHeavyDeckFactory),
        }
    }
}
