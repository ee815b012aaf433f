//! End-of-round scoring.
//!
//! The winner scores the value of every card left in the other players' hands:
//!   number cards = face value, skip/reverse/draw two/skip two = 20, any wild = 50.

use crate::card::Card;
use crate::state::PlayerId;

/// Total point value of a hand.
pub fn hand_points(hand: &[Card]) -> u32 {
    hand.iter().map(Card::points).sum()
}

/// Winner's score given every seat's hand.
///
/// Assumes `winner` indexes into `hands`; its own hand is not counted.
pub fn round_score<'a>(hands: impl IntoIterator<Item = &'a [Card]>, winner: PlayerId) -> u32 {
    hands
        .into_iter()
        .enumerate()
        .filter(|(seat, _)| *seat != winner)
        .map(|(_, hand)| hand_points(hand))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardColor;

    #[test]
    fn test_round_score_three_players() {
        // Winner 0 holds nothing; opponents hold red 5 + wild and a skip => 55 + 20
        let hands: Vec<Vec<Card>> = vec![
            vec![],
            vec![Card::number(CardColor::Red, 5), Card::wild()],
            vec![Card::skip(CardColor::Blue)],
        ];
        assert_eq!(round_score(hands.iter().map(Vec::as_slice), 0), 75);
    }

    #[test]
    fn test_round_score_ignores_winner_hand() {
        let hands: Vec<Vec<Card>> = vec![
            vec![Card::wild_draw_four()],
            vec![Card::number(CardColor::Green, 0)],
        ];
        assert_eq!(round_score(hands.iter().map(Vec::as_slice), 1), 50);
    }

    #[test]
    fn test_hand_points_values() {
        let hand = [
            Card::number(CardColor::Yellow, 9),
            Card::reverse(CardColor::Yellow),
            Card::draw_two(CardColor::Red),
            Card::skip_two(CardColor::Green),
            Card::wild_draw_four().with_color(CardColor::Red),
        ];
        assert_eq!(hand_points(&hand), 9 + 20 + 20 + 20 + 50);
        assert_eq!(hand_points(&[]), 0);
    }
}
