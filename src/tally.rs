use super::*;

/// How many times each move has been played by the losing side of a round.
///
/// This is the only memory the adaptive opponent has. Ties never touch it,
/// so its total always equals the number of decisive rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally([u32; 3]);

impl Tally {
    pub fn count(&self, m: Move) -> u32 {
        self.0[usize::from(m)]
    }
    /// Charge one loss to the move that was played and lost.
    pub fn record(&mut self, loser: Move) {
        self.0[usize::from(loser)] += 1;
    }
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
    /// The move with the most losses, earliest in canonical order on ties.
    pub fn most_defeated(&self) -> Move {
        Move::all()
            .into_iter()
            .fold(Move::Rock, |best, m| match self.count(m) > self.count(best) {
                true => m,
                false => best,
            })
    }
}

impl From<[(Move, u32); 3]> for Tally {
    fn from(counts: [(Move, u32); 3]) -> Self {
        let mut tally = Self::default();
        for (m, n) in counts {
            tally.0[usize::from(m)] = n;
        }
        tally
    }
}

impl std::ops::Index<Move> for Tally {
    type Output = u32;
    fn index(&self, m: Move) -> &u32 {
        &self.0[usize::from(m)]
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "rock {} / paper {} / scissors {}",
            self[Move::Rock],
            self[Move::Paper],
            self[Move::Scissors]
        )
    }
}
