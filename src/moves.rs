use rand::Rng;

/// One of the three throws.
///
/// The ordering (R < P < S) is the canonical enumeration order. It breaks
/// ties whenever several moves share the same tally.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All three moves in canonical order.
    pub const fn all() -> [Move; 3] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// The move this one beats.
    pub const fn defeats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }
    /// The move that beats this one.
    pub const fn defeated_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
    /// Uniformly random move.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Move {
        Move::from(rng.random_range(0..3u8))
    }
    /// Hand drawing shown when the move is revealed.
    pub fn art(&self) -> &'static str {
        match self {
            Move::Rock => ROCK,
            Move::Paper => PAPER,
            Move::Scissors => SCISSORS,
        }
    }
}

const ROCK: &str = r"
    _______
---'   ____)
      (_____)
      (_____)
      (____)
---.__(___)
";

const PAPER: &str = r"
     _______
---'    ____)____
           ______)
          _______)
         _______)
---.__________)
";

const SCISSORS: &str = r"
    _______
---'   ____)____
          ______)
       __________)
      (____)
---.__(___)
";

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => unreachable!("invalid move"),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// table index
impl From<Move> for usize {
    fn from(m: Move) -> usize {
        m as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "rock"),
            Move::Paper => write!(f, "paper"),
            Move::Scissors => write!(f, "scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn defeats_has_no_fixed_point() {
        for m in Move::all() {
            assert!(m.defeats() != m);
        }
    }

    #[test]
    fn defeats_is_bijective() {
        let images = Move::all()
            .into_iter()
            .map(Move::defeats)
            .collect::<HashSet<_>>();
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn defeats_is_a_three_cycle() {
        for m in Move::all() {
            assert_eq!(m.defeats().defeats().defeats(), m);
        }
    }

    #[test]
    fn defeated_by_inverts_defeats() {
        for m in Move::all() {
            assert_eq!(m.defeats().defeated_by(), m);
            assert_eq!(m.defeated_by().defeats(), m);
        }
    }

    #[test]
    fn classic_rules() {
        assert_eq!(Move::Rock.defeats(), Move::Scissors);
        assert_eq!(Move::Scissors.defeats(), Move::Paper);
        assert_eq!(Move::Paper.defeats(), Move::Rock);
    }

    #[test]
    fn bijective_u8() {
        for m in Move::all() {
            assert_eq!(m, Move::from(u8::from(m)));
        }
    }

    #[test]
    fn art_is_distinct() {
        let arts = Move::all()
            .iter()
            .map(Move::art)
            .collect::<HashSet<_>>();
        assert_eq!(arts.len(), 3);
    }

    #[test]
    fn random_covers_every_move() {
        let mut rng = SmallRng::seed_from_u64(7);
        let seen = (0..256)
            .map(|_| Move::random(&mut rng))
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), 3);
    }
}
