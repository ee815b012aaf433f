use std::io::Write;

use crate::events::{EventKind, GameEvent, GameListener};
use crate::state::{Direction, PlayerId};

/// Event subscriber that writes one line per event to an injected sink.
///
/// Player names are picked up from the `GameStart` event; before that seats are
/// printed by index. Write failures are ignored.
pub struct EventLogger<W: Write> {
    sink: W,
    names: Vec<String>,
}

impl<W: Write> EventLogger<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            names: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> GameListener for EventLogger<W> {
    fn on_event(&mut self, _kind: EventKind, event: &GameEvent) {
        if let GameEvent::GameStart { players, .. } = event {
            self.names = players.clone();
        }
        let line = describe_event(event, &self.names);
        let _ = writeln!(self.sink, "{line}");
    }
}

fn seat_name(names: &[String], seat: PlayerId) -> String {
    names
        .get(seat)
        .cloned()
        .unwrap_or_else(|| format!("Player {seat}"))
}

/// Human-readable description of an event.
pub fn describe_event(event: &GameEvent, names: &[String]) -> String {
    match event {
        GameEvent::GameStart { players, top_card } => format!(
            "Game started with {} players. Top card: {top_card}",
            players.len()
        ),
        GameEvent::TurnStart { player, top_card } => {
            format!("{}'s turn. Top card: {top_card}", seat_name(names, *player))
        }
        GameEvent::CardPlayed { player, card } => {
            format!("{} played {card}", seat_name(names, *player))
        }
        GameEvent::CardDrawn { player, cards, .. } => match cards.len() {
            0 => format!("{} could not draw a card", seat_name(names, *player)),
            1 => format!("{} drew a card", seat_name(names, *player)),
            count => format!("{} drew {count} cards", seat_name(names, *player)),
        },
        GameEvent::UnoCalled { player } => format!("{} called UNO!", seat_name(names, *player)),
        GameEvent::DirectionChange { direction } => {
            let label = match direction {
                Direction::Clockwise => "clockwise",
                Direction::CounterClockwise => "counter-clockwise",
            };
            format!("Direction changed to {label}")
        }
        GameEvent::PlayerSkipped { player } => {
            format!("{} was skipped", seat_name(names, *player))
        }
        GameEvent::GameEnd { winner, score } => format!(
            "Game ended. {} won with a score of {score}",
            seat_name(names, *winner)
        ),
    }
}
