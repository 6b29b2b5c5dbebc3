use super::*;

/// One line of player input, classified.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Quit,
    Invalid,
}

/// str classification, total and case-insensitive
impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Command::Play(Move::Rock),
            "p" | "paper" => Command::Play(Move::Paper),
            "s" | "scissors" => Command::Play(Move::Scissors),
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(Command::from("r"), Command::Play(Move::Rock));
        assert_eq!(Command::from("p"), Command::Play(Move::Paper));
        assert_eq!(Command::from("s"), Command::Play(Move::Scissors));
        assert_eq!(Command::from("q"), Command::Quit);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(Command::from("R"), Command::Play(Move::Rock));
        assert_eq!(Command::from("P"), Command::Play(Move::Paper));
        assert_eq!(Command::from("S"), Command::Play(Move::Scissors));
        assert_eq!(Command::from("Q"), Command::Quit);
        assert_eq!(Command::from("ScIsSoRs"), Command::Play(Move::Scissors));
    }

    #[test]
    fn full_words_and_whitespace() {
        assert_eq!(Command::from("rock\n"), Command::Play(Move::Rock));
        assert_eq!(Command::from("  paper  "), Command::Play(Move::Paper));
        assert_eq!(Command::from("\ts\r\n"), Command::Play(Move::Scissors));
        assert_eq!(Command::from("exit"), Command::Quit);
    }

    #[test]
    fn everything_else_is_invalid() {
        for input in ["", "\n", "x", "rp", "rocks", "lizard", "1", "q q"] {
            assert_eq!(Command::from(input), Command::Invalid, "{:?}", input);
        }
    }
}
