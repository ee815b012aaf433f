#![allow(dead_code)]

use unobot::{Card, Game, GameBuilder, GameError, Player};

pub const NAMES: [&str; 4] = ["Ana", "Bo", "Cy", "Di"];

/// Builds a deck whose deal is fully scripted: `hands[i]` goes to seat `i` in order,
/// then `top` is turned up, then `draws` come off the pile first to last.
pub fn scripted_deck(hands: &[Vec<Card>], top: Card, draws: &[Card]) -> Vec<Card> {
    let hand_size = hands[0].len();
    assert!(
        hands.iter().all(|hand| hand.len() == hand_size),
        "scripted hands must be the same size"
    );
    let mut order: Vec<Card> = hands.iter().flatten().copied().collect();
    order.push(top);
    order.extend_from_slice(draws);
    order.reverse();
    order
}

/// Starts a game of human players over a scripted deck.
pub fn scripted_game(
    hands: Vec<Vec<Card>>,
    top: Card,
    draws: Vec<Card>,
) -> Result<Game, GameError> {
    let deck = scripted_deck(&hands, top, &draws);
    let mut builder = GameBuilder::new()
        .with_hand_size(hands[0].len())
        .with_deck(deck);
    for name in NAMES.iter().take(hands.len()) {
        builder = builder.with_player(Player::human(*name));
    }
    let mut game = builder.build()?;
    game.start()?;
    Ok(game)
}

/// Every card the round knows about: deck piles, top card and all hands.
pub fn cards_in_play(game: &Game) -> usize {
    game.deck().total_cards()
        + game
            .players()
            .iter()
            .map(|player| player.card_count())
            .sum::<usize>()
}
