use super::*;

/// Anything that can pick the computer's move.
///
/// The tally is the full history an opponent is allowed to see. It never
/// learns the player's current throw.
pub trait Opponent {
    fn choose(&mut self, tally: &Tally) -> Move;
}

impl<P: Opponent + ?Sized> Opponent for &mut P {
    fn choose(&mut self, tally: &Tally) -> Move {
        (**self).choose(tally)
    }
}
