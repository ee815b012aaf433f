use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::effect::TurnControl;
use crate::player::Player;
use crate::strategy::Strategy;

/// Baseline strategy that picks uniformly among the playable cards in hand.
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn make_move(&mut self, table: &mut dyn TurnControl) {
        let Some(top) = table.top_card() else {
            return;
        };
        let Some(player) = table.current_player() else {
            return;
        };
        let color = player.choose_color();
        let playable: Vec<Card> = player
            .hand()
            .iter()
            .filter(|card| card.can_play_on(&top))
            .copied()
            .collect();
        if let Some(card) = playable.choose(&mut self.rng) {
            table.play_card(card.with_color(color));
            return;
        }
        if let Some(drawn) = table.draw_card() {
            if drawn.can_play_on(&top) {
                let color = table
                    .current_player()
                    .map(Player::choose_color)
                    .unwrap_or(color);
                table.play_card(drawn.with_color(color));
            }
        }
    }
}
