use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use crate::action::Action;
use crate::card::{Card, CardColor};
use crate::deck::{Deck, DeckFactory, DeckVariant, FixedDeckFactory};
use crate::effect::{EffectStatus, TurnControl};
use crate::error::{GameError, InvalidAction};
use crate::events::{EventBus, GameEvent, GameListener, ListenerId};
use crate::player::Player;
use crate::score::round_score;
use crate::state::{
    DEFAULT_HAND_SIZE, Direction, GameConfig, GamePhase, GameStateView, MIN_PLAYERS, PlayerId,
    PlayerView,
};

const DEFAULT_SEED: u64 = 0x0DEC_0DED_5EED_CAFE;

/// What happened to an accepted play.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayOutcome {
    /// The turn moved on to the next player.
    Continued,
    /// A human played a wild card; the turn waits for `complete_wild_card_play`.
    AwaitingColor,
    Won { winner: PlayerId, score: u32 },
}

/// Builder that assembles players, deck recipe and settings before a game exists.
pub struct GameBuilder {
    config: GameConfig,
    factory: Option<Box<dyn DeckFactory>>,
    players: Vec<Player>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig {
                hand_size: DEFAULT_HAND_SIZE,
                seed: DEFAULT_SEED,
                variant: DeckVariant::Standard,
            },
            factory: None,
            players: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    pub fn with_variant(mut self, variant: DeckVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Use `cards` in the given order every round. The last card is drawn first.
    pub fn with_deck(self, cards: Vec<Card>) -> Self {
        self.with_deck_factory(Box::new(FixedDeckFactory::new(cards)))
    }

    pub fn with_deck_factory(mut self, factory: Box<dyn DeckFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    pub fn with_players(mut self, players: impl IntoIterator<Item = Player>) -> Self {
        self.players.extend(players);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// UNO rules referee: owns the deck and the seats and enforces turn order.
pub struct Game {
    config: GameConfig,
    factory: Box<dyn DeckFactory>,
    players: Vec<Player>,
    current: PlayerId,
    direction: Direction,
    deck: Deck,
    phase: GamePhase,
    drew_this_turn: bool,
    turn: u64,
    listeners: EventBus,
    rng: StdRng,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder {
            config,
            factory: None,
            players: Vec::new(),
        }
        .build()
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder {
            config,
            factory,
            players,
        } = builder;
        let config = GameConfig::new(config.hand_size, config.seed, config.variant)?;
        let factory = factory.unwrap_or_else(|| config.variant.factory());
        let mut rng = StdRng::seed_from_u64(config.seed);
        let deck = factory.create_deck(rng.next_u64());
        Ok(Self {
            config,
            factory,
            players,
            current: 0,
            direction: Direction::Clockwise,
            deck,
            phase: GamePhase::NotStarted,
            drew_this_turn: false,
            turn: 0,
            listeners: EventBus::new(),
            rng,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_seat(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn top_card(&self) -> Option<Card> {
        self.deck.top_card()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of turn changes since the round started.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn has_drawn_this_turn(&self) -> bool {
        self.drew_this_turn
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Ended { .. })
    }

    pub fn is_awaiting_color(&self) -> bool {
        matches!(self.phase, GamePhase::AwaitingColorChoice { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Ended { winner, .. } => Some(winner),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<u32> {
        match self.phase {
            GamePhase::Ended { score, .. } => Some(score),
            _ => None,
        }
    }

    pub fn add_player(&mut self, player: Player) -> Result<(), GameError> {
        match self.phase {
            GamePhase::NotStarted => {
                self.players.push(player);
                Ok(())
            }
            GamePhase::Ended { .. } => Err(GameError::InvalidState(
                "cannot add a player after the game has ended",
            )),
            GamePhase::InProgress | GamePhase::AwaitingColorChoice { .. } => Err(
                GameError::InvalidState("cannot add a player while a round is in progress"),
            ),
        }
    }

    pub fn add_event_listener(&mut self, listener: impl GameListener + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Deals a new round and opens the first turn.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::NotStarted {
            return Err(GameError::InvalidState(
                "round already started; reset before starting again",
            ));
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                required: MIN_PLAYERS,
                found: self.players.len(),
            });
        }
        let hand_size = self.config.hand_size;
        let mut deck = self.fresh_deck();
        if deck.total_cards() < self.players.len() * hand_size + 1 {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal every hand",
            ));
        }
        for player in &mut self.players {
            player.reset_for_round();
            player.add_cards(deck.draw_multiple(hand_size));
        }
        let mut first = deck.draw().ok_or(GameError::InvalidConfiguration(
            "deck exhausted while dealing",
        ))?;
        if first.is_wild() {
            let color = CardColor::SUITS
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(CardColor::Red);
            first.set_color(color);
        }
        deck.discard(first);

        self.deck = deck;
        self.current = 0;
        self.direction = Direction::Clockwise;
        self.drew_this_turn = false;
        self.turn = 0;
        self.phase = GamePhase::InProgress;

        let names = self
            .players
            .iter()
            .map(|player| player.name().to_string())
            .collect();
        self.emit(GameEvent::GameStart {
            players: names,
            top_card: first,
        });
        self.begin_turn();
        Ok(())
    }

    /// Returns the engine to `NotStarted` with empty hands and a freshly built deck.
    pub fn reset(&mut self) {
        self.deck = self.fresh_deck();
        for player in &mut self.players {
            player.reset_for_round();
        }
        self.current = 0;
        self.direction = Direction::Clockwise;
        self.drew_this_turn = false;
        self.turn = 0;
        self.phase = GamePhase::NotStarted;
    }

    /// Plays `card` for the current player. Returns false when the play is refused.
    pub fn play_card(&mut self, card: Card) -> bool {
        self.try_play_card(card).is_ok()
    }

    pub fn try_play_card(&mut self, card: Card) -> Result<PlayOutcome, InvalidAction> {
        self.ensure_turn_open()?;
        let top = self.deck.top_card().ok_or(InvalidAction::NoTopCard)?;
        if !card.can_play_on(&top) {
            return Err(InvalidAction::IllegalCard { card, top });
        }
        let seat = self.current;
        let mut played = self.players[seat]
            .play_card(&card)
            .ok_or(InvalidAction::CardNotInHand(card))?;
        if let Some(color) = card.chosen_color() {
            played.set_color(color);
        }
        if played.needs_color() && self.players[seat].is_automated() {
            let color = self.players[seat].choose_color();
            played.set_color(color);
        }

        let status = played.play_effect(self);
        self.deck.discard(played);
        self.emit(GameEvent::CardPlayed {
            player: seat,
            card: played,
        });

        match status {
            EffectStatus::AwaitingColor => {
                self.phase = GamePhase::AwaitingColorChoice { player: seat };
                Ok(PlayOutcome::AwaitingColor)
            }
            EffectStatus::Applied => Ok(self.finish_play(seat)),
        }
    }

    /// Plays on behalf of `seat`, refusing when it is not that seat's turn.
    pub fn play_card_for(
        &mut self,
        seat: PlayerId,
        card: Card,
    ) -> Result<PlayOutcome, InvalidAction> {
        self.ensure_seat(seat)?;
        self.try_play_card(card)
    }

    /// Resumes a wild play held for a human's color choice.
    ///
    /// Returns false, changing nothing, when no wild is waiting or `color` is `CardColor::Wild`.
    pub fn complete_wild_card_play(&mut self, color: CardColor) -> bool {
        let GamePhase::AwaitingColorChoice { player } = self.phase else {
            return false;
        };
        if color.is_wild() {
            return false;
        }
        let Some(top) = self.deck.top_card_mut() else {
            return false;
        };
        top.set_color(color);
        let card = *top;
        self.phase = GamePhase::InProgress;
        card.play_effect(self);
        self.finish_play(player);
        true
    }

    /// Draws one card for the current player.
    ///
    /// An unplayable card ends the turn; a playable one leaves the player free to play
    /// it or pass. When the deck is exhausted nothing is drawn and the turn passes.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.try_draw_card().ok().flatten()
    }

    pub fn try_draw_card(&mut self) -> Result<Option<Card>, InvalidAction> {
        self.ensure_turn_open()?;
        if self.drew_this_turn {
            return Err(InvalidAction::AlreadyDrew);
        }
        let seat = self.current;
        let Some(card) = self.deck.draw() else {
            self.emit(GameEvent::CardDrawn {
                player: seat,
                cards: Vec::new(),
                requested: 1,
            });
            self.advance_turn();
            return Ok(None);
        };
        self.players[seat].add_card(card);
        self.emit(GameEvent::CardDrawn {
            player: seat,
            cards: vec![card],
            requested: 1,
        });
        let playable = self
            .deck
            .top_card()
            .is_some_and(|top| card.can_play_on(&top));
        if playable {
            self.drew_this_turn = true;
        } else {
            self.advance_turn();
        }
        Ok(Some(card))
    }

    pub fn draw_card_for(&mut self, seat: PlayerId) -> Result<Option<Card>, InvalidAction> {
        self.ensure_seat(seat)?;
        self.try_draw_card()
    }

    /// Ends the turn of a player who drew a playable card and chose to keep it.
    pub fn pass_turn(&mut self) -> bool {
        self.try_pass_turn().is_ok()
    }

    pub fn try_pass_turn(&mut self) -> Result<(), InvalidAction> {
        self.ensure_turn_open()?;
        if !self.drew_this_turn {
            return Err(InvalidAction::NothingToPass);
        }
        self.advance_turn();
        Ok(())
    }

    /// Actions open to `seat` right now. Empty when it is not that seat's move.
    pub fn legal_actions(&self, seat: PlayerId) -> Vec<Action> {
        match self.phase {
            GamePhase::AwaitingColorChoice { player } if player == seat => CardColor::SUITS
                .iter()
                .map(|color| Action::ChooseColor(*color))
                .collect(),
            GamePhase::InProgress if seat == self.current => {
                let mut actions: Vec<Action> = Vec::new();
                if let Some(top) = self.deck.top_card() {
                    for card in self.players[seat].hand() {
                        let duplicate = actions
                            .iter()
                            .any(|action| action.card().is_some_and(|held| held.same_face(card)));
                        if card.can_play_on(&top) && !duplicate {
                            actions.push(Action::Play(*card));
                        }
                    }
                }
                actions.push(if self.drew_this_turn {
                    Action::Pass
                } else {
                    Action::Draw
                });
                actions
            }
            _ => Vec::new(),
        }
    }

    /// Applies an action for `seat`, mapping refusals to errors.
    pub fn apply_action(&mut self, seat: PlayerId, action: Action) -> Result<(), GameError> {
        if seat >= self.players.len() {
            return Err(GameError::InvalidPlayer(seat));
        }
        match action {
            Action::Play(card) => {
                self.play_card_for(seat, card)?;
            }
            Action::Draw => {
                self.draw_card_for(seat)?;
            }
            Action::Pass => {
                self.ensure_seat(seat)?;
                self.try_pass_turn()?;
            }
            Action::ChooseColor(color) => match self.phase {
                GamePhase::AwaitingColorChoice { player } if player == seat => {
                    if !self.complete_wild_card_play(color) {
                        return Err(GameError::InvalidState("a wild card needs a suit color"));
                    }
                }
                GamePhase::AwaitingColorChoice { .. } => {
                    return Err(InvalidAction::NotPlayersTurn.into());
                }
                _ => return Err(GameError::InvalidState("no wild card is waiting for a color")),
            },
        }
        Ok(())
    }

    /// Runs the current player's strategy for one turn.
    ///
    /// Returns false when the round is not open or the current player is human.
    pub fn play_automated_turn(&mut self) -> bool {
        if self.phase != GamePhase::InProgress {
            return false;
        }
        let seat = self.current;
        let Some(mut strategy) = self.players[seat].take_strategy() else {
            return false;
        };
        let turn = self.turn;
        strategy.make_move(self);
        self.players[seat].restore_strategy(strategy);

        // A strategy that left its turn open forfeits it.
        if self.phase == GamePhase::InProgress && self.turn == turn {
            if !self.drew_this_turn {
                self.draw_card();
            }
            if self.phase == GamePhase::InProgress && self.turn == turn && self.drew_this_turn {
                self.pass_turn();
            }
        }
        true
    }

    /// Plays automated turns until a human must act, the round ends, or `limit` turns ran.
    pub fn run_automated_turns(&mut self, limit: usize) -> usize {
        let mut played = 0;
        while played < limit && self.play_automated_turn() {
            played += 1;
        }
        played
    }

    pub fn game_state(&self) -> GameStateView {
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(id, player)| PlayerView {
                id,
                name: player.name().to_string(),
                hand: player.hand().to_vec(),
                skipped_turns: player.skipped_turns(),
                automated: player.is_automated(),
                is_current: id == self.current,
            })
            .collect();
        GameStateView {
            phase: self.phase,
            players,
            current_player: self.current,
            direction: self.direction,
            top_card: self.deck.top_card(),
            winner: self.winner(),
            score: self.score(),
            game_over: self.is_finished(),
            turn: self.turn,
            draw_pile_count: self.deck.remaining(),
            discard_pile_count: self.deck.discard_len(),
        }
    }

    fn fresh_deck(&mut self) -> Deck {
        let seed = self.rng.next_u64();
        self.factory.create_deck(seed)
    }

    fn emit(&mut self, event: GameEvent) {
        self.listeners.emit(&event);
    }

    fn ensure_turn_open(&self) -> Result<(), InvalidAction> {
        match self.phase {
            GamePhase::InProgress => Ok(()),
            GamePhase::AwaitingColorChoice { .. } => Err(InvalidAction::AwaitingColorChoice),
            GamePhase::NotStarted | GamePhase::Ended { .. } => {
                Err(InvalidAction::GameNotInProgress)
            }
        }
    }

    fn ensure_seat(&self, seat: PlayerId) -> Result<(), InvalidAction> {
        if seat != self.current {
            return Err(InvalidAction::NotPlayersTurn);
        }
        Ok(())
    }

    fn next_seat(&self, seat: PlayerId) -> PlayerId {
        self.direction.next_seat(seat, self.players.len())
    }

    fn begin_turn(&mut self) {
        if let Some(top_card) = self.deck.top_card() {
            self.emit(GameEvent::TurnStart {
                player: self.current,
                top_card,
            });
        }
    }

    /// Win check, UNO announcement, then the next turn.
    fn finish_play(&mut self, seat: PlayerId) -> PlayOutcome {
        if let Some((winner, score)) = self.check_win() {
            return PlayOutcome::Won { winner, score };
        }
        if self.players[seat].has_uno() {
            self.emit(GameEvent::UnoCalled { player: seat });
        }
        self.advance_turn();
        PlayOutcome::Continued
    }

    fn check_win(&mut self) -> Option<(PlayerId, u32)> {
        let winner = self.players.iter().position(Player::has_won)?;
        let score = round_score(self.players.iter().map(Player::hand), winner);
        self.phase = GamePhase::Ended { winner, score };
        self.emit(GameEvent::GameEnd { winner, score });
        Some((winner, score))
    }

    /// Steps to the next seat. A landed seat holding `n` forfeits spends them all at
    /// once: `n` seats starting with it are passed, one `PlayerSkipped` each, and the
    /// seat reached is checked the same way.
    fn advance_turn(&mut self) {
        self.drew_this_turn = false;
        let mut seat = self.next_seat(self.current);
        loop {
            let mut pending = 0;
            while self.players[seat].consume_skipped_turn() {
                pending += 1;
            }
            if pending == 0 {
                break;
            }
            for _ in 0..pending {
                self.emit(GameEvent::PlayerSkipped { player: seat });
                seat = self.next_seat(seat);
            }
        }
        self.current = seat;
        self.turn += 1;
        self.begin_turn();
    }
}

impl TurnControl for Game {
    fn skip_next_player(&mut self, turns: u32) {
        if self.players.is_empty() {
            return;
        }
        let next = self.next_seat(self.current);
        self.players[next].add_skipped_turns(turns);
    }

    fn reverse_direction(&mut self) {
        self.direction = self.direction.reversed();
        self.emit(GameEvent::DirectionChange {
            direction: self.direction,
        });
    }

    fn next_player_draws(&mut self, count: usize) {
        if self.players.is_empty() {
            return;
        }
        let next = self.next_seat(self.current);
        let cards = self.deck.draw_multiple(count);
        self.players[next].add_cards(cards.iter().copied());
        self.emit(GameEvent::CardDrawn {
            player: next,
            cards,
            requested: count,
        });
    }

    fn current_player(&self) -> Option<&Player> {
        Game::current_player(self)
    }

    fn top_card(&self) -> Option<Card> {
        Game::top_card(self)
    }

    fn play_card(&mut self, card: Card) -> bool {
        Game::play_card(self, card)
    }

    fn draw_card(&mut self) -> Option<Card> {
        Game::draw_card(self)
    }
}
