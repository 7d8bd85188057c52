use clap::Parser;
use domino_cover::config::{SolverConfig, LOG_LEVEL};
use domino_cover::errors::RunError;
use domino_cover::logging::init_logging;
use domino_cover::tiling::answer::{check_file, read_file, solve_file, AnswerFormat};
use domino_cover::SearchStrategy;
use log::{error, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Decides whether a board can be covered by dominoes and writes a covering if it can.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File with the board: its side on the first line, then rows of 1 (open) and 0 (blocked).
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// File the answer is written to.
    #[arg(default_value = "output.txt")]
    output: PathBuf,

    /// JSON file with solver configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Augmenting path search, bfs or dfs.
    #[arg(long)]
    search: Option<SearchStrategy>,

    /// Largest accepted board side.
    #[arg(long)]
    max_grid_size: Option<usize>,

    /// Write the answer as JSON instead of the plain text format.
    #[arg(long)]
    json: bool,

    /// Instead of solving, check the answer in this file against the board.
    #[arg(long)]
    check: Option<PathBuf>,

    /// More logging, may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LOG_LEVEL,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = init_logging(level) {
        eprintln!("Failed to set up logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_json(&read_file(path)?)?,
        None => SolverConfig::default(),
    };
    if let Some(search) = args.search {
        config.search = search;
    }
    if let Some(max_grid_size) = args.max_grid_size {
        config.max_grid_size = max_grid_size;
    }

    match &args.check {
        Some(answer) => check_file(&args.input, answer, &config).map(|_| ()),
        None => {
            let format = if args.json {
                AnswerFormat::Json
            } else {
                AnswerFormat::Text
            };
            solve_file(&args.input, &args.output, &config, format)
        }
    }
}
