use super::*;

/// A player throw paired with the computer's answer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub computer: Move,
}

impl Round {
    pub fn new(player: Move, computer: Move) -> Self {
        Self { player, computer }
    }
    /// Tie on equal moves, otherwise whoever's move defeats the other.
    pub fn outcome(&self) -> Outcome {
        if self.player == self.computer {
            Outcome::Tie
        } else if self.player.defeats() == self.computer {
            Outcome::Player
        } else {
            Outcome::Computer
        }
    }
    /// The move played by the losing side, if anyone lost.
    pub fn loser(&self) -> Option<Move> {
        match self.outcome() {
            Outcome::Tie => None,
            Outcome::Player => Some(self.computer),
            Outcome::Computer => Some(self.player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_is_exhaustive() {
        for a in Move::all() {
            for b in Move::all() {
                let outcome = Round::new(a, b).outcome();
                match outcome {
                    Outcome::Tie => assert_eq!(a, b),
                    Outcome::Player => assert_eq!(a.defeats(), b),
                    Outcome::Computer => {
                        assert!(a != b);
                        assert!(a.defeats() != b);
                        assert_eq!(b.defeats(), a);
                    }
                }
            }
        }
    }

    #[test]
    fn outcome_is_antisymmetric() {
        for a in Move::all() {
            for b in Move::all() {
                let forward = Round::new(a, b).outcome();
                let reverse = Round::new(b, a).outcome();
                match forward {
                    Outcome::Tie => assert_eq!(reverse, Outcome::Tie),
                    Outcome::Player => assert_eq!(reverse, Outcome::Computer),
                    Outcome::Computer => assert_eq!(reverse, Outcome::Player),
                }
            }
        }
    }

    #[test]
    fn rock_crushes_scissors() {
        assert_eq!(Round::new(Move::Rock, Move::Scissors).outcome(), Outcome::Player);
        assert_eq!(Round::new(Move::Scissors, Move::Rock).outcome(), Outcome::Computer);
    }

    #[test]
    fn loser_is_the_move_that_lost() {
        assert_eq!(Round::new(Move::Paper, Move::Rock).loser(), Some(Move::Rock));
        assert_eq!(Round::new(Move::Paper, Move::Scissors).loser(), Some(Move::Paper));
        assert_eq!(Round::new(Move::Paper, Move::Paper).loser(), None);
    }
}
