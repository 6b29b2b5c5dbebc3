use super::*;
use colored::Colorize;

/// Running totals for the session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub human: u32,
    pub computer: u32,
    pub ties: u32,
}

impl Score {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Tie => self.ties += 1,
            Outcome::Player => self.human += 1,
            Outcome::Computer => self.computer += 1,
        }
    }
    /// Completed rounds. Quits and invalid input never count.
    pub fn rounds(&self) -> u32 {
        self.human + self.computer + self.ties
    }
    /// One-line form used in the closing summary.
    pub fn line(&self) -> String {
        format!(
            "{} | {} | {}",
            format!("You: {}", self.human).blue(),
            format!("Computer: {}", self.computer).red(),
            format!("Ties: {}", self.ties).magenta(),
        )
    }
}

/// Multi-line form shown after every round.
impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", "Score:".cyan())?;
        writeln!(f, "{}", format!("You: {}", self.human).blue())?;
        writeln!(f, "{}", format!("Computer: {}", self.computer).red())?;
        write!(f, "{}", format!("Ties: {}", self.ties).magenta())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_rounds() {
        let mut score = Score::default();
        score.record(Outcome::Tie);
        score.record(Outcome::Player);
        score.record(Outcome::Player);
        score.record(Outcome::Computer);
        assert_eq!(score.human, 2);
        assert_eq!(score.computer, 1);
        assert_eq!(score.ties, 1);
        assert_eq!(score.rounds(), 4);
    }

    #[test]
    fn display_separates_counters() {
        let score = Score {
            human: 3,
            computer: 1,
            ties: 2,
        };
        let text = score.to_string();
        assert!(text.contains("You: 3"));
        assert!(text.contains("Computer: 1"));
        assert!(text.contains("Ties: 2"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn line_is_single_line() {
        let text = Score::default().line();
        assert!(text.contains("You: 0"));
        assert!(text.contains("Computer: 0"));
        assert!(text.contains("Ties: 0"));
        assert!(!text.contains('\n'));
    }
}
