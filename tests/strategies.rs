mod common;

use common::{cards_in_play, scripted_deck};
use rand::SeedableRng;
use rand::rngs::StdRng;
use unobot::deck::STANDARD_DECK_SIZE;
use unobot::{
    Card, CardColor, CpuStrategy, EventKind, EventRecorder, Game, GameBuilder, GameError,
    GamePhase, Player, RandomStrategy, Strategy, TurnControl, round_score,
};

fn red(value: u8) -> Card {
    Card::number(CardColor::Red, value)
}

fn blue(value: u8) -> Card {
    Card::number(CardColor::Blue, value)
}

fn green(value: u8) -> Card {
    Card::number(CardColor::Green, value)
}

/// Seats a CPU player against a human over a scripted deck and starts the round.
fn cpu_versus_human(
    cpu_hand: Vec<Card>,
    human_hand: Vec<Card>,
    top: Card,
    draws: &[Card],
) -> Result<Game, GameError> {
    let hands = vec![cpu_hand, human_hand];
    let mut game = GameBuilder::new()
        .with_hand_size(hands[0].len())
        .with_deck(scripted_deck(&hands, top, draws))
        .with_player(Player::automated("Ana", Box::new(CpuStrategy::new())))
        .with_player(Player::human("Bo"))
        .build()?;
    game.start()?;
    Ok(game)
}

/// Never acts; the engine has to close the turn itself.
struct Idle;

impl Strategy for Idle {
    fn make_move(&mut self, _table: &mut dyn TurnControl) {}
}

#[test]
fn cpu_plays_first_legal_card_in_hand_order() -> Result<(), GameError> {
    let mut game = cpu_versus_human(
        vec![blue(1), red(9), Card::skip(CardColor::Red)],
        vec![green(1), green(2), green(3)],
        red(4),
        &[],
    )?;
    assert!(game.play_automated_turn());
    assert_eq!(game.top_card(), Some(red(9)));
    assert_eq!(game.current_seat(), 1);
    assert_eq!(game.player(0).unwrap().hand(), [blue(1), Card::skip(CardColor::Red)]);
    assert!(!game.play_automated_turn());
    Ok(())
}

#[test]
fn cpu_plays_a_legal_drawn_card() -> Result<(), GameError> {
    let mut game = cpu_versus_human(
        vec![blue(1), blue(2)],
        vec![green(1), green(2)],
        red(4),
        &[red(6)],
    )?;
    assert!(game.play_automated_turn());
    assert_eq!(game.top_card(), Some(red(6)));
    assert_eq!(game.player(0).unwrap().hand(), [blue(1), blue(2)]);
    assert_eq!(game.current_seat(), 1);
    Ok(())
}

#[test]
fn cpu_keeps_an_unplayable_drawn_card() -> Result<(), GameError> {
    let mut game = cpu_versus_human(
        vec![blue(1), blue(2)],
        vec![green(1), green(2)],
        red(4),
        &[green(6)],
    )?;
    assert!(game.play_automated_turn());
    assert_eq!(game.top_card(), Some(red(4)));
    assert_eq!(game.player(0).unwrap().card_count(), 3);
    assert_eq!(game.current_seat(), 1);
    Ok(())
}

#[test]
fn cpu_names_its_most_common_suit_for_wilds() -> Result<(), GameError> {
    let mut game = cpu_versus_human(
        vec![Card::wild(), blue(1), blue(2)],
        vec![green(1), green(2), green(3)],
        red(4),
        &[],
    )?;
    assert!(game.play_automated_turn());
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.top_card().map(|card| card.color()), Some(CardColor::Blue));
    assert_eq!(game.current_seat(), 1);
    Ok(())
}

#[test]
fn automated_wild_is_colored_without_suspending() -> Result<(), GameError> {
    let mut game = cpu_versus_human(
        vec![Card::wild(), green(3), green(4)],
        vec![blue(1), blue(2), blue(3)],
        red(4),
        &[],
    )?;
    assert!(game.play_card(Card::wild()));
    assert!(!game.is_awaiting_color());
    assert_eq!(game.top_card().map(|card| card.color()), Some(CardColor::Green));
    assert_eq!(game.current_seat(), 1);
    Ok(())
}

#[test]
fn idle_strategy_forfeits_its_turn() -> Result<(), GameError> {
    let hands = vec![vec![blue(1), blue(2)], vec![green(1), green(2)]];
    let mut game = GameBuilder::new()
        .with_hand_size(2)
        .with_deck(scripted_deck(&hands, red(4), &[red(6)]))
        .with_player(Player::automated("Ana", Box::new(Idle)))
        .with_player(Player::human("Bo"))
        .build()?;
    game.start()?;

    assert!(game.play_automated_turn());
    assert_eq!(game.current_seat(), 1);
    assert_eq!(game.player(0).unwrap().card_count(), 3);
    assert_eq!(game.top_card(), Some(red(4)));
    Ok(())
}

#[test]
fn automated_turns_stop_at_a_human_seat() -> Result<(), GameError> {
    let mut game = cpu_versus_human(
        vec![red(9), blue(1)],
        vec![green(1), green(2)],
        red(4),
        &[],
    )?;
    assert_eq!(game.run_automated_turns(10), 1);
    assert_eq!(game.current_seat(), 1);
    assert_eq!(game.run_automated_turns(10), 0);
    Ok(())
}

fn play_out(game: &mut Game, deck_size: usize) {
    let mut steps = 0;
    while !game.is_finished() {
        assert!(steps < 10_000, "round did not finish");
        assert!(game.play_automated_turn());
        assert_eq!(cards_in_play(game), deck_size);
        steps += 1;
    }
}

#[test]
fn four_cpus_finish_a_round_without_losing_cards() -> Result<(), GameError> {
    let mut game = GameBuilder::new()
        .with_seed(11)
        .with_players(
            ["Ana", "Bo", "Cy", "Di"]
                .into_iter()
                .map(|name| Player::automated(name, Box::new(CpuStrategy::new()))),
        )
        .build()?;
    let recorder = EventRecorder::new();
    game.add_event_listener(recorder.clone());
    game.start()?;

    play_out(&mut game, STANDARD_DECK_SIZE);

    let winner = game.winner().unwrap();
    assert_eq!(game.player(winner).unwrap().card_count(), 0);
    assert_eq!(
        game.score(),
        Some(round_score(game.players().iter().map(Player::hand), winner))
    );
    assert_eq!(recorder.count(EventKind::GameEnd), 1);
    assert_eq!(recorder.kinds().last(), Some(&EventKind::GameEnd));
    Ok(())
}

#[test]
fn random_and_cpu_players_play_repeated_rounds() -> Result<(), GameError> {
    let mut game = GameBuilder::new()
        .with_seed(5)
        .with_player(Player::automated(
            "Rand",
            Box::new(RandomStrategy::new(StdRng::seed_from_u64(3))),
        ))
        .with_player(Player::automated("Cpu", Box::new(CpuStrategy::new())))
        .with_player(Player::automated(
            "Rand 2",
            Box::new(RandomStrategy::new(StdRng::seed_from_u64(4))),
        ))
        .build()?;

    for _ in 0..3 {
        game.start()?;
        play_out(&mut game, STANDARD_DECK_SIZE);
        assert!(game.winner().is_some());
        game.reset();
    }
    Ok(())
}
