use super::*;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed the computer for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,
    /// Milliseconds to hang on the countdown before the reveal
    #[arg(long, value_name = "MS", default_value_t = REVEAL_PAUSE.as_millis() as u64)]
    pub pause: u64,
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.pause)
    }
    pub fn opponent(&self) -> Adaptive {
        match self.seed {
            Some(seed) => Adaptive::seeded(seed),
            None => Adaptive::entropic(),
        }
    }
}
