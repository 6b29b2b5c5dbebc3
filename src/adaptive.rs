use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Opponent that counters the history of losing moves.
///
/// With probability [`EXPLORATION`] it throws uniformly at random and
/// ignores the tally. Otherwise it finds the move that has lost most often
/// and plays the move *that* move defeats. At the start of a game every
/// count is zero, so the exploitation branch falls back on canonical order:
/// rock is the most defeated, and scissors gets thrown.
pub struct Adaptive<R: Rng = SmallRng> {
    rng: R,
    exploration: f64,
}

impl Adaptive<SmallRng> {
    /// Reproducible opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
    /// Opponent seeded from the thread-local generator.
    pub fn entropic() -> Self {
        Self::from(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Adaptive<R> {
    /// Override the exploration probability. Values outside [0, 1] clamp.
    pub fn with_exploration(mut self, p: f64) -> Self {
        self.exploration = p.clamp(0.0, 1.0);
        self
    }
    pub fn exploration(&self) -> f64 {
        self.exploration
    }
    /// Deterministic half of the policy.
    pub fn exploit(tally: &Tally) -> Move {
        tally.most_defeated().defeats()
    }
}

impl<R: Rng> From<R> for Adaptive<R> {
    fn from(rng: R) -> Self {
        Self {
            rng,
            exploration: EXPLORATION,
        }
    }
}

impl<R: Rng> Opponent for Adaptive<R> {
    fn choose(&mut self, tally: &Tally) -> Move {
        let draw = self.rng.random::<f64>();
        if draw < self.exploration {
            let choice = Move::random(&mut self.rng);
            log::debug!("explore ({:.3}) -> {}", draw, choice);
            choice
        } else {
            let choice = Self::exploit(tally);
            log::debug!(
                "exploit ({:.3}) most defeated {} [{}] -> {}",
                draw,
                tally.most_defeated(),
                tally,
                choice
            );
            choice
        }
    }
}
