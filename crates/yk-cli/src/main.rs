//! Terminal front end for the Yolkaris adventure.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "yolk",
    about = "Yolkaris: a text adventure across a small golden planet and beyond",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play(PlayArgs),

    /// Print a scenario's content as JSON
    Export {
        /// Scenario number (1 or 2)
        scenario: u32,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Default)]
struct PlayArgs {
    /// Seed for reproducible placement and combat
    #[arg(long)]
    seed: Option<u64>,

    /// Scenario to play without asking (1 or 2)
    #[arg(long)]
    scenario: Option<u32>,

    /// Player name to use without asking
    #[arg(long)]
    name: Option<String>,

    /// No delays and no "press enter" pauses
    #[arg(long)]
    fast: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Wrap width for story text (40-200)
    #[arg(long, default_value_t = terminal::DEFAULT_WRAP_WIDTH)]
    width: usize,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Play(args)) => play(args),
        Some(Commands::Export { scenario, output }) => {
            commands::export::run(scenario, output.as_deref())
        }
        None => play(PlayArgs {
            width: terminal::DEFAULT_WRAP_WIDTH,
            ..PlayArgs::default()
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn play(args: PlayArgs) -> Result<(), String> {
    let presenter = terminal::PresenterConfig::default()
        .with_wrap_width(args.width)
        .with_color(!args.no_color);
    let presenter = if args.fast {
        presenter.fast()
    } else {
        presenter
    };
    commands::play::run(
        args.seed,
        args.scenario,
        args.name.as_deref(),
        presenter,
    )
}

/// Route `log` output to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}
