use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use tracing_subscriber::filter::LevelFilter as TraceLevel;

use command::{Command, HELP};
use session::GameSession;

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn trace_level(level: LevelFilter) -> TraceLevel {
    match level {
        LevelFilter::Off => TraceLevel::OFF,
        LevelFilter::Error => TraceLevel::ERROR,
        LevelFilter::Warn => TraceLevel::WARN,
        LevelFilter::Info => TraceLevel::INFO,
        LevelFilter::Debug => TraceLevel::DEBUG,
        LevelFilter::Trace => TraceLevel::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(trace_level(args.verbose.log_level_filter()))
        .with_writer(io::stderr)
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut session = GameSession::new(args.seed).context("could not deal the first board")?;
    let mut stdout = io::stdout().lock();
    render::draw(&mut stdout, &session)?;
    writeln!(stdout, "`h` for help")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(stdout, "{}", message)?;
                continue;
            }
        };

        let was_running = session.is_clock_running();
        match command {
            Command::Reveal(coords) => {
                session.reveal(coords);
            }
            Command::Flag(coords) => {
                session.toggle_flag(coords);
            }
            Command::NewGame => session.restart()?,
            Command::Help => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        if was_running && !session.is_clock_running() {
            log::debug!("final board: {}", serde_json::to_string(session.board())?);
        }
        render::draw(&mut stdout, &session)?;
    }

    log::debug!("bye");
    Ok(())
}
