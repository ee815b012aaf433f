use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::state::{Direction, PlayerId};

/// Discriminant of a [`GameEvent`], for listeners that filter by kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    GameStart,
    TurnStart,
    CardPlayed,
    CardDrawn,
    UnoCalled,
    DirectionChange,
    PlayerSkipped,
    GameEnd,
}

/// State transitions announced by the engine.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStart { players: Vec<String>, top_card: Card },
    TurnStart { player: PlayerId, top_card: Card },
    CardPlayed { player: PlayerId, card: Card },
    /// `requested` may exceed `cards.len()` when the deck ran dry.
    CardDrawn {
        player: PlayerId,
        cards: Vec<Card>,
        requested: usize,
    },
    UnoCalled { player: PlayerId },
    DirectionChange { direction: Direction },
    PlayerSkipped { player: PlayerId },
    GameEnd { winner: PlayerId, score: u32 },
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::GameStart { .. } => EventKind::GameStart,
            GameEvent::TurnStart { .. } => EventKind::TurnStart,
            GameEvent::CardPlayed { .. } => EventKind::CardPlayed,
            GameEvent::CardDrawn { .. } => EventKind::CardDrawn,
            GameEvent::UnoCalled { .. } => EventKind::UnoCalled,
            GameEvent::DirectionChange { .. } => EventKind::DirectionChange,
            GameEvent::PlayerSkipped { .. } => EventKind::PlayerSkipped,
            GameEvent::GameEnd { .. } => EventKind::GameEnd,
        }
    }
}

/// Subscriber to engine events.
pub trait GameListener {
    fn on_event(&mut self, kind: EventKind, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(EventKind, &GameEvent),
{
    fn on_event(&mut self, kind: EventKind, event: &GameEvent) {
        self(kind, event)
    }
}

/// Handle returned on subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

/// Ordered multicast of events to registered listeners.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn GameListener>)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn GameListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers `event` to every listener in subscription order.
    pub fn emit(&mut self, event: &GameEvent) {
        let kind = event.kind();
        for (_, listener) in &mut self.listeners {
            listener.on_event(kind, event);
        }
    }
}

/// Listener that stores every event it receives. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(GameEvent::kind).collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameListener for EventRecorder {
    fn on_event(&mut self, _kind: EventKind, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardColor;

    #[test]
    fn listeners_receive_events_in_order_until_removed() {
        let mut bus = EventBus::new();
        let recorder = EventRecorder::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let first = bus.subscribe(Box::new(recorder.clone()));
        bus.subscribe(Box::new(move |kind: EventKind, _: &GameEvent| {
            sink.borrow_mut().push(kind);
        }));

        bus.emit(&GameEvent::UnoCalled { player: 1 });
        assert!(bus.unsubscribe(first));
        assert!(!bus.unsubscribe(first));
        bus.emit(&GameEvent::PlayerSkipped { player: 0 });

        assert_eq!(recorder.kinds(), [EventKind::UnoCalled]);
        assert_eq!(
            *seen.borrow(),
            [EventKind::UnoCalled, EventKind::PlayerSkipped]
        );
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn kind_matches_variant() {
        let event = GameEvent::CardDrawn {
            player: 0,
            cards: vec![Card::number(CardColor::Red, 1)],
            requested: 2,
        };
        assert_eq!(event.kind(), EventKind::CardDrawn);
    }
}
