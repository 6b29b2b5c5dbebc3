//! Rock, paper, scissors against a computer that learns.
//!
//! The opponent keeps a tally of which moves have been on the losing side of
//! a round and, most of the time, plays whatever beats the move that loses
//! most often. The rest of the time it picks uniformly at random so it is
//! never fully predictable.
//!
//! ## Rules
//!
//! - [`Move`] — Rock, paper, scissors and the 3-cycle `defeats` relation
//! - [`Round`] — One pairing of player and computer moves
//! - [`Outcome`] — Tie, player win, or computer win
//!
//! ## State
//!
//! - [`Score`] — Running wins, losses, and ties
//! - [`Tally`] — How often each move was played by the losing side
//!
//! ## Play
//!
//! - [`Command`] — A line of player input, classified
//! - [`Opponent`] — Anything that can pick the computer's move
//! - [`Adaptive`] — The learning opponent
//! - [`Screen`] — Terminal presentation
//! - [`Game`] — The prompt, reveal, score loop
//! - `Args` — Command line flags (requires `cli` feature)
mod adaptive;
#[cfg(feature = "cli")]
mod args;
mod command;
mod game;
mod moves;
mod opponent;
mod outcome;
mod round;
mod score;
mod screen;
mod tally;

pub use adaptive::*;
#[cfg(feature = "cli")]
pub use args::*;
pub use command::*;
pub use game::*;
pub use moves::*;
pub use opponent::*;
pub use outcome::*;
pub use round::*;
pub use score::*;
pub use screen::*;
pub use tally::*;

/// Probability that the opponent ignores its tally and plays at random.
pub const EXPLORATION: f64 = 0.3;
/// Dramatic pause between the countdown and the reveal.
pub const REVEAL_PAUSE: std::time::Duration = std::time::Duration::from_secs(1);
/// Horizontal rule between sections of output.
pub const DELIMITER: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Initialize terminal logging on stderr so records never land on the board.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
