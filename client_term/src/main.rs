use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use game_core::driver::{self, FramePacing, SystemClock};
use game_core::{Config, GameRng, Match, Params};
use log::LevelFilter;

use terminal::{TermInput, TermRenderer, TerminalSession};

mod canvas;
mod keyboard;
mod logging;
mod terminal;

/// Two-player Pong in the terminal: W/S and the arrow keys
#[derive(Parser, Debug)]
#[command(name = "pong", version, about)]
struct Cli {
    /// Points needed to win a match
    #[arg(long, default_value_t = Params::WIN_SCORE, value_parser = clap::value_parser!(u8).range(1..=99))]
    win_score: u8,

    /// Seed for ball launch directions (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second
    #[arg(long, default_value_t = Params::TARGET_FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Where to write the log
    #[arg(long, default_value = "pong.log")]
    log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("pong: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init_log(cli.log_level, &cli.log_file)?;

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!(
        "New match: first to {}, seed {:?}, {} fps",
        cli.win_score,
        cli.seed,
        cli.fps
    );
    let mut game = Match::new(Config::new().with_win_score(cli.win_score), rng);

    let session = TerminalSession::start().context("failed to set up the terminal")?;
    let mut input = TermInput::new(session.reports_key_release());
    let mut renderer = TermRenderer::new();
    let mut clock = SystemClock::new();

    let summary = driver::run(
        &mut game,
        &mut input,
        &mut renderer,
        &mut clock,
        FramePacing::from_fps(cli.fps),
    );
    drop(session);

    let summary = summary.context("failed to draw the court")?;
    println!(
        "Final score {} - {} after {} frames",
        summary.score.left, summary.score.right, summary.frames
    );
    Ok(())
}
