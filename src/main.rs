//! Rochambeau Binary
//!
//! Plays rock, paper, scissors on the terminal until the player quits.
//!
//! Options: --seed, --pause, --plain, -v

use clap::Parser;
use rochambeau::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level())?;
    if args.plain {
        colored::control::set_override(false);
    }
    let input = std::io::stdin().lock();
    let output = std::io::stdout().lock();
    Game::new(input, output, args.opponent())
        .with_pause(args.delay())
        .run()?;
    Ok(())
}
