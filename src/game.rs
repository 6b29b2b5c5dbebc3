use super::*;
use std::io::BufRead;
use std::io::Write;
use std::time::Duration;

/// Where the loop is between two calls to [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a line from the player.
    Prompting,
    /// The player has thrown; the computer has not.
    Resolving(Move),
    /// Both hands are on the table.
    Reporting(Round),
    Terminated,
}

/// One session: reads commands, asks the opponent, keeps score.
///
/// Score and tally are owned here and only change in [`Phase::Reporting`].
/// Invalid input and quitting never touch them.
pub struct Game<I, O, P>
where
    I: BufRead,
    O: Write,
    P: Opponent,
{
    input: I,
    screen: Screen<O>,
    opponent: P,
    score: Score,
    tally: Tally,
}

impl<I, O, P> Game<I, O, P>
where
    I: BufRead,
    O: Write,
    P: Opponent,
{
    pub fn new(input: I, output: O, opponent: P) -> Self {
        Self {
            input,
            screen: Screen::new(output),
            opponent,
            score: Score::default(),
            tally: Tally::default(),
        }
    }
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.screen = self.screen.with_pause(pause);
        self
    }
    pub fn score(&self) -> &Score {
        &self.score
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn into_output(self) -> O {
        self.screen.into_inner()
    }

    /// Play until the player quits or input runs dry.
    pub fn run(&mut self) -> anyhow::Result<Score> {
        log::info!("starting game");
        self.screen.show_intro()?;
        let mut phase = Phase::Prompting;
        while phase != Phase::Terminated {
            phase = self.step(phase)?;
        }
        self.screen.show_summary(&self.score)?;
        log::info!(
            "game over after {} rounds, tally {}",
            self.score.rounds(),
            self.tally
        );
        Ok(self.score)
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self, phase: Phase) -> std::io::Result<Phase> {
        match phase {
            Phase::Prompting => match self.read()? {
                Command::Quit => Ok(Phase::Terminated),
                Command::Invalid => {
                    self.screen.guide()?;
                    Ok(Phase::Prompting)
                }
                Command::Play(player) => Ok(Phase::Resolving(player)),
            },
            Phase::Resolving(player) => {
                let computer = self.opponent.choose(&self.tally);
                let round = Round::new(player, computer);
                self.screen.reveal(&round)?;
                Ok(Phase::Reporting(round))
            }
            Phase::Reporting(round) => {
                self.settle(&round);
                self.screen.announce(round.outcome())?;
                self.screen.show_score(&self.score)?;
                Ok(Phase::Prompting)
            }
            Phase::Terminated => Ok(Phase::Terminated),
        }
    }

    /// Update score and charge the losing move.
    fn settle(&mut self, round: &Round) {
        let outcome = round.outcome();
        self.score.record(outcome);
        if let Some(loser) = round.loser() {
            self.tally.record(loser);
        }
        log::info!(
            "{} vs {}: {:?} ({}-{}-{})",
            round.player,
            round.computer,
            outcome,
            self.score.human,
            self.score.computer,
            self.score.ties
        );
    }

    fn read(&mut self) -> std::io::Result<Command> {
        self.screen.prompt()?;
        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line)? {
            0 => {
                log::info!("end of input");
                Ok(Command::Quit)
            }
            _ => Ok(Command::from(String::from_utf8_lossy(&line).as_ref())),
        }
    }
}
