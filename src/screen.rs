use super::*;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

/// Everything the player sees, written to any sink.
pub struct Screen<W: Write> {
    out: W,
    pause: Duration,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pause: REVEAL_PAUSE,
        }
    }
    /// Change how long the countdown hangs before the reveal.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn show_intro(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", DELIMITER)?;
        writeln!(
            self.out,
            "{}",
            "Welcome to Rock - Paper - Scissors. Can you beat a learning computer?".cyan()
        )?;
        writeln!(
            self.out,
            "{}",
            "Press 'R' for Rock, 'P' for Paper, 'S' for Scissors, and 'Q' to quit.".yellow()
        )?;
        writeln!(self.out, "{}", DELIMITER)
    }
    pub fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.out, "{}", "Your move (R/P/S/Q): ".green())?;
        self.out.flush()
    }
    /// Shown on input that maps to no command.
    pub fn guide(&mut self) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{}",
            "Oops! That's not a valid move. Remember, 'R' for Rock, 'P' for Paper, and 'S' for Scissors."
                .yellow()
        )
    }
    /// Countdown, pause, then both hands.
    pub fn reveal(&mut self, round: &Round) -> std::io::Result<()> {
        writeln!(self.out, "\nRock... Paper... Scissors... SHOOT!\n")?;
        self.out.flush()?;
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
        writeln!(self.out, "{}", format!("You chose:\n{}", round.player.art()).blue())?;
        writeln!(self.out, "{}", format!("Computer chose:\n{}", round.computer.art()).red())
    }
    pub fn announce(&mut self, outcome: Outcome) -> std::io::Result<()> {
        writeln!(self.out, "{}", outcome)
    }
    pub fn show_score(&mut self, score: &Score) -> std::io::Result<()> {
        writeln!(self.out, "{}", DELIMITER)?;
        writeln!(self.out, "{}", score)?;
        writeln!(self.out, "{}", DELIMITER)
    }
    pub fn show_summary(&mut self, score: &Score) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            "Thanks for playing! Here's the final score:".cyan()
        )?;
        writeln!(self.out, "{}", score.line())?;
        writeln!(self.out, "{}", DELIMITER)?;
        self.out.flush()
    }
}
