use colored::Colorize;

/// Who took a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    Player,
    Computer,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Tie => write!(f, "{}", "It's a tie!".magenta()),
            Outcome::Player => write!(f, "{}", "You've won this round!".blue()),
            Outcome::Computer => write!(f, "{}", "The computer wins this round!".red()),
        }
    }
}
