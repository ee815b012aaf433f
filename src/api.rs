use serde::{Deserialize, Serialize};

use crate::card::{Card, CardColor};
use crate::error::GameError;
use crate::game::Game;
use crate::state::GameStateView;

/// Request a presentation layer can send on behalf of the current player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameRequest {
    StartGame,
    PlayCard { card: Card },
    DrawCard,
    PassTurn,
    ChooseColor { color: CardColor },
    /// Acknowledged without rule effect; UNO is announced by the engine itself.
    CallUno,
    GetState,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameResponse {
    Started,
    Played { accepted: bool },
    Drawn { card: Option<Card> },
    Passed { accepted: bool },
    ColorChosen { accepted: bool },
    UnoAcknowledged,
    State(GameStateView),
}

/// In-process request dispatcher over a borrowed game.
pub struct LocalGameApi<'a> {
    game: &'a mut Game,
}

impl<'a> LocalGameApi<'a> {
    pub fn new(game: &'a mut Game) -> Self {
        Self { game }
    }

    pub fn send(&mut self, request: GameRequest) -> Result<GameResponse, GameError> {
        let response = match request {
            GameRequest::StartGame => {
                self.game.start()?;
                GameResponse::Started
            }
            GameRequest::PlayCard { card } => GameResponse::Played {
                accepted: self.game.play_card(card),
            },
            GameRequest::DrawCard => GameResponse::Drawn {
                card: self.game.draw_card(),
            },
            GameRequest::PassTurn => GameResponse::Passed {
                accepted: self.game.pass_turn(),
            },
            GameRequest::ChooseColor { color } => GameResponse::ColorChosen {
                accepted: self.game.complete_wild_card_play(color),
            },
            GameRequest::CallUno => GameResponse::UnoAcknowledged,
            GameRequest::GetState => GameResponse::State(self.game.game_state()),
        };
        Ok(response)
    }
}
