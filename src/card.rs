use std::fmt;

use serde::{Deserialize, Serialize};

use crate::effect::{EffectStatus, TurnControl};

pub const MAX_NUMBER: u8 = 9;
pub const ACTION_POINTS: u32 = 20;
pub const WILD_POINTS: u32 = 50;

/// One of the four suits, or the marker carried by a wild card with no chosen color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl CardColor {
    /// Suits in their fixed enumeration order. Used for tie-breaking.
    pub const SUITS: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];

    #[inline]
    pub fn is_wild(self) -> bool {
        matches!(self, CardColor::Wild)
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
            CardColor::Wild => "wild",
        };
        f.write_str(name)
    }
}

/// Face of a card. Each kind maps to exactly one entry of the effect table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Numbered card between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    /// Variant action card: the next player forfeits two turns.
    SkipTwo,
    Wild,
    WildDrawFour,
}

type Effect = fn(&mut dyn TurnControl);

impl CardKind {
    #[inline]
    pub fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }

    #[inline]
    pub fn is_action(self) -> bool {
        matches!(
            self,
            CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo | CardKind::SkipTwo
        )
    }

    /// Points this face is worth in an opponent's hand at the end of a round.
    pub fn points(self) -> u32 {
        match self {
            CardKind::Number(value) => u32::from(value),
            CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo | CardKind::SkipTwo => {
                ACTION_POINTS
            }
            CardKind::Wild | CardKind::WildDrawFour => WILD_POINTS,
        }
    }

    fn effect(self) -> Effect {
        match self {
            CardKind::Number(_) | CardKind::Wild => no_effect,
            CardKind::Skip => skip_next,
            CardKind::Reverse => reverse,
            CardKind::DrawTwo => draw_two,
            CardKind::SkipTwo => skip_two,
            CardKind::WildDrawFour => draw_four,
        }
    }
}

fn no_effect(_table: &mut dyn TurnControl) {}

fn skip_next(table: &mut dyn TurnControl) {
    table.skip_next_player(1);
}

fn reverse(table: &mut dyn TurnControl) {
    table.reverse_direction();
}

fn draw_two(table: &mut dyn TurnControl) {
    table.next_player_draws(2);
    table.skip_next_player(1);
}

fn skip_two(table: &mut dyn TurnControl) {
    table.skip_next_player(2);
}

fn draw_four(table: &mut dyn TurnControl) {
    table.next_player_draws(4);
    table.skip_next_player(1);
}

/// A playing card. Only wild cards carry mutable state: the color chosen when played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    color: CardColor,
    kind: CardKind,
    chosen: Option<CardColor>,
}

impl Card {
    pub fn number(color: CardColor, value: u8) -> Self {
        debug_assert!(value <= MAX_NUMBER);
        Self::colored(color, CardKind::Number(value))
    }

    pub fn skip(color: CardColor) -> Self {
        Self::colored(color, CardKind::Skip)
    }

    pub fn reverse(color: CardColor) -> Self {
        Self::colored(color, CardKind::Reverse)
    }

    pub fn draw_two(color: CardColor) -> Self {
        Self::colored(color, CardKind::DrawTwo)
    }

    pub fn skip_two(color: CardColor) -> Self {
        Self::colored(color, CardKind::SkipTwo)
    }

    pub fn wild() -> Self {
        Self {
            color: CardColor::Wild,
            kind: CardKind::Wild,
            chosen: None,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            color: CardColor::Wild,
            kind: CardKind::WildDrawFour,
            chosen: None,
        }
    }

    fn colored(color: CardColor, kind: CardKind) -> Self {
        debug_assert!(!color.is_wild(), "colored cards need a suit");
        Self {
            color,
            kind,
            chosen: None,
        }
    }

    /// Printed color of the card, ignoring any chosen color.
    #[inline]
    pub fn base_color(&self) -> CardColor {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// Color used for legality: the chosen color of a wild once set, otherwise the printed one.
    #[inline]
    pub fn color(&self) -> CardColor {
        self.chosen.unwrap_or(self.color)
    }

    #[inline]
    pub fn chosen_color(&self) -> Option<CardColor> {
        self.chosen
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }

    /// True for a wild card that has not been given a color yet.
    #[inline]
    pub fn needs_color(&self) -> bool {
        self.is_wild() && self.chosen.is_none()
    }

    #[inline]
    pub fn points(&self) -> u32 {
        self.kind.points()
    }

    /// Assigns the color of a wild card. Ignored for colored cards and for `CardColor::Wild`.
    pub fn set_color(&mut self, color: CardColor) -> bool {
        if !self.is_wild() || color.is_wild() {
            return false;
        }
        self.chosen = Some(color);
        true
    }

    pub fn reset_color(&mut self) {
        self.chosen = None;
    }

    pub fn with_color(mut self, color: CardColor) -> Self {
        self.set_color(color);
        self
    }

    /// Identity used for hand lookups: printed color and kind, chosen color ignored.
    #[inline]
    pub fn same_face(&self, other: &Card) -> bool {
        self.color == other.color && self.kind == other.kind
    }

    /// Checks whether the card may be placed on `top`.
    pub fn can_play_on(&self, top: &Card) -> bool {
        if self.is_wild() {
            return true;
        }
        let top_color = top.color();
        if top_color.is_wild() || top_color == self.color {
            return true;
        }
        match self.kind {
            CardKind::Number(value) => top.kind == CardKind::Number(value),
            kind => top.kind == kind,
        }
    }

    /// Runs the card's effect against `table`. A wild card with no chosen color runs nothing.
    pub fn play_effect(&self, table: &mut dyn TurnControl) -> EffectStatus {
        if self.needs_color() {
            return EffectStatus::AwaitingColor;
        }
        (self.kind.effect())(table);
        EffectStatus::Applied
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Number(value) => write!(f, "{} {value}", self.color),
            CardKind::Skip => write!(f, "{} skip", self.color),
            CardKind::Reverse => write!(f, "{} reverse", self.color),
            CardKind::DrawTwo => write!(f, "{} draw two", self.color),
            CardKind::SkipTwo => write!(f, "{} skip two", self.color),
            CardKind::Wild | CardKind::WildDrawFour => {
                let name = if self.kind == CardKind::Wild {
                    "wild"
                } else {
                    "wild draw four"
                };
                match self.chosen {
                    Some(color) => write!(f, "{name} ({color})"),
                    None => f.write_str(name),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    #[derive(Default)]
    struct FakeTable {
        calls: Vec<String>,
    }

    impl TurnControl for FakeTable {
        fn skip_next_player(&mut self, turns: u32) {
            self.calls.push(format!("skip {turns}"));
        }

        fn reverse_direction(&mut self) {
            self.calls.push(String::from("reverse"));
        }

        fn next_player_draws(&mut self, count: usize) {
            self.calls.push(format!("draw {count}"));
        }

        fn current_player(&self) -> Option<&Player> {
            None
        }

        fn top_card(&self) -> Option<Card> {
            None
        }

        fn play_card(&mut self, _card: Card) -> bool {
            false
        }

        fn draw_card(&mut self) -> Option<Card> {
            None
        }
    }

    fn effect_calls(card: Card) -> (EffectStatus, Vec<String>) {
        let mut table = FakeTable::default();
        let status = card.play_effect(&mut table);
        (status, table.calls)
    }

    #[test]
    fn number_cards_have_no_effect() {
        let (status, calls) = effect_calls(Card::number(CardColor::Red, 7));
        assert_eq!(status, EffectStatus::Applied);
        assert!(calls.is_empty());
    }

    #[test]
    fn action_cards_drive_the_table() {
        assert_eq!(effect_calls(Card::skip(CardColor::Blue)).1, ["skip 1"]);
        assert_eq!(effect_calls(Card::reverse(CardColor::Blue)).1, ["reverse"]);
        assert_eq!(
            effect_calls(Card::draw_two(CardColor::Blue)).1,
            ["draw 2", "skip 1"]
        );
        assert_eq!(effect_calls(Card::skip_two(CardColor::Blue)).1, ["skip 2"]);
    }

    #[test]
    fn wild_effects_wait_for_a_color() {
        let (status, calls) = effect_calls(Card::wild_draw_four());
        assert_eq!(status, EffectStatus::AwaitingColor);
        assert!(calls.is_empty());

        let (status, calls) = effect_calls(Card::wild_draw_four().with_color(CardColor::Green));
        assert_eq!(status, EffectStatus::Applied);
        assert_eq!(calls, ["draw 4", "skip 1"]);

        let (status, calls) = effect_calls(Card::wild().with_color(CardColor::Red));
        assert_eq!(status, EffectStatus::Applied);
        assert!(calls.is_empty());
    }

    #[test]
    fn set_color_only_touches_wild_cards() {
        let mut red = Card::number(CardColor::Red, 3);
        assert!(!red.set_color(CardColor::Blue));
        assert_eq!(red.color(), CardColor::Red);

        let mut wild = Card::wild();
        assert!(!wild.set_color(CardColor::Wild));
        assert_eq!(wild.color(), CardColor::Wild);
        assert!(wild.set_color(CardColor::Yellow));
        assert_eq!(wild.color(), CardColor::Yellow);
        assert_eq!(wild.base_color(), CardColor::Wild);
        wild.reset_color();
        assert!(wild.needs_color());
    }

    #[test]
    fn chosen_color_does_not_change_identity() {
        let picked = Card::wild().with_color(CardColor::Blue);
        assert!(picked.same_face(&Card::wild()));
        assert!(!picked.same_face(&Card::wild_draw_four()));
    }

    #[test]
    fn display_names() {
        assert_eq!(Card::number(CardColor::Green, 4).to_string(), "green 4");
        assert_eq!(Card::draw_two(CardColor::Red).to_string(), "red draw two");
        assert_eq!(
            Card::wild_draw_four().with_color(CardColor::Blue).to_string(),
            "wild draw four (blue)"
        );
    }
}
