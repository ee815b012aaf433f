use crate::effect::TurnControl;

/// Move selection for automated players.
///
/// A strategy acts only through `table`: it may play, draw, and inspect the current
/// player and the top card. Leaving the turn open is allowed; the engine passes it.
pub trait Strategy {
    fn make_move(&mut self, table: &mut dyn TurnControl);
}
