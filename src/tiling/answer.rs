use crate::config::SolverConfig;
use crate::errors::{RunError, TilingError};
use crate::tiling::board::Board;
use crate::tiling::solver::solve;
use crate::tiling::text_format::{format_tiling, impossible_answer, parse_board, parse_tiling};
use crate::tiling::verify::verify_tiling;
use crate::u;
use log::info;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum AnswerFormat {
    #[default]
    Text,
    Json,
}

/// Solves the board and renders the answer. In the text format an empty board is reported as
/// impossible.
pub fn render_answer(board: &Board, config: &SolverConfig, format: AnswerFormat) -> Result<String, TilingError> {
    let tiling = match solve(board, config) {
        Ok(tiling) => tiling,
        Err(TilingError::GridTooSmall { .. }) if format == AnswerFormat::Text => return Ok(impossible_answer()),
        Err(e) => return Err(e),
    };
    Ok(match format {
        AnswerFormat::Text => format_tiling(&tiling),
        AnswerFormat::Json => u!(serde_json::to_string_pretty(&tiling)) + "\n",
    })
}

/// Checks an answer in the text format against the board. A covering is verified directly, a claim
/// that there is none is checked by solving the board.
/// Returns the number of dominoes of a valid covering, or `None` for a correct impossible answer.
pub fn check_answer(board: &Board, config: &SolverConfig, answer: &str) -> Result<Option<usize>, TilingError> {
    match parse_tiling(answer)? {
        Some(dominoes) => {
            verify_tiling(board, &dominoes)?;
            info!("The answer is a valid covering with {} dominoes.", dominoes.len());
            Ok(Some(dominoes.len()))
        }
        None => {
            let coverable = match solve(board, config) {
                Ok(tiling) => tiling.is_possible(),
                Err(TilingError::GridTooSmall { .. }) => false,
                Err(e) => return Err(e),
            };
            if coverable {
                return Err(TilingError::CoverableClaimedImpossible);
            }
            info!("The answer correctly claims the board cannot be covered.");
            Ok(None)
        }
    }
}

/// Solves the board from `input` and writes the answer to `output`. The output file is truncated
/// before anything else, so a failed run leaves it empty instead of holding a stale answer.
pub fn solve_file(input: &Path, output: &Path, config: &SolverConfig, format: AnswerFormat) -> Result<(), RunError> {
    fs::File::create(output).map_err(|e| io_error(output, e))?;
    let board = parse_board(&read_file(input)?)?;
    let answer = render_answer(&board, config, format)?;
    fs::write(output, answer).map_err(|e| io_error(output, e))
}

/// Checks the answer in `answer` against the board from `input`.
pub fn check_file(input: &Path, answer: &Path, config: &SolverConfig) -> Result<Option<usize>, RunError> {
    let board = parse_board(&read_file(input)?)?;
    Ok(check_answer(&board, config, &read_file(answer)?)?)
}

pub fn read_file(path: &Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: std::io::Error) -> RunError {
    RunError::Io {
        path: path.display().to_string(),
        source,
    }
}
