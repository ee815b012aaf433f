use crate::card::Card;
use crate::player::Player;

/// Narrow view of an engine that card effects and strategies act through.
///
/// `Game` implements it for real play; tests substitute a fake to exercise card logic alone.
pub trait TurnControl {
    /// Makes the player after the current one forfeit `turns` upcoming turns.
    fn skip_next_player(&mut self, turns: u32);
    fn reverse_direction(&mut self);
    /// Deals up to `count` cards to the player after the current one.
    fn next_player_draws(&mut self, count: usize);
    fn current_player(&self) -> Option<&Player>;
    fn top_card(&self) -> Option<Card>;
    fn play_card(&mut self, card: Card) -> bool;
    fn draw_card(&mut self) -> Option<Card>;
}

/// Result of running a card's effect.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EffectStatus {
    Applied,
    /// The card is a wild without a chosen color; nothing ran.
    AwaitingColor,
}
