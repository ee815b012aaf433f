use crate::effect::TurnControl;
use crate::player::Player;
use crate::strategy::Strategy;

/// Simple heuristic: play the first legal card in hand order, otherwise draw and
/// play the drawn card when it is legal. Wild colors follow the most common suit in hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuStrategy;

impl CpuStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for CpuStrategy {
    fn make_move(&mut self, table: &mut dyn TurnControl) {
        let Some(top) = table.top_card() else {
            return;
        };
        let Some(player) = table.current_player() else {
            return;
        };
        let color = player.choose_color();
        if let Some(card) = player.find_playable_card(&top).copied() {
            table.play_card(card.with_color(color));
            return;
        }
        let Some(drawn) = table.draw_card() else {
            return;
        };
        if drawn.can_play_on(&top) {
            let color = table
                .current_player()
                .map(Player::choose_color)
                .unwrap_or(color);
            table.play_card(drawn.with_color(color));
        }
    }
}
