//! Plain text formats of boards and answers.
//!
//! A board is written as its side `n` on the first line followed by `n` rows of `n` characters,
//! `1` for open cells and anything else (usually `0`) for blocked ones.
//!
//! An answer is `0` when the board cannot be covered. Otherwise it is `1` followed by a line
//! `(r1,c1)(r2,c2)` for each domino, with one-based coordinates and the black cell first.

use crate::errors::TilingError;
use crate::geometry::grid_xy::GridXY;
use crate::tiling::board::Board;
use crate::tiling::solution::{Domino, Tiling};
use crate::u;
use regex::Regex;
use std::fmt::Write;

const IMPOSSIBLE: &str = "0";
const POSSIBLE: &str = "1";

/// Parses a board. A side below one yields an empty board without reading any rows.
pub fn parse_board(text: &str) -> Result<Board, TilingError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(TilingError::EmptyInput)?.trim();
    let size = header
        .parse::<i64>()
        .map_err(|_| TilingError::InvalidSize(header.to_owned()))?;
    if size < 1 {
        return Ok(Board::new(0));
    }
    let size = usize::try_from(size).map_err(|_| TilingError::InvalidSize(header.to_owned()))?;

    // Rows are collected first so that a huge declared size with few rows fails before allocating.
    // Characters past the n-th one in a row are ignored.
    let rows = lines
        .take(size)
        .map(|line| line.trim_end().chars().take(size).collect::<String>())
        .collect::<Vec<_>>();
    if rows.len() < size {
        return Err(TilingError::MissingRows {
            expected: size,
            found: rows.len(),
        });
    }
    Board::from_pattern(&rows[..])
}

/// The answer for a board that cannot be covered, whatever the reason.
pub fn impossible_answer() -> String {
    format!("{}\n", IMPOSSIBLE)
}

pub fn format_tiling(tiling: &Tiling) -> String {
    match tiling {
        Tiling::Impossible(_) => impossible_answer(),
        Tiling::Matching(dominoes) => {
            let mut result = format!("{}\n", POSSIBLE);
            for domino in dominoes.iter() {
                // Writing to a String cannot fail.
                let _ = writeln!(result, "{}{}", domino.black.one_based(), domino.white.one_based());
            }
            result
        }
    }
}

/// Parses an answer. Returns `None` for the impossible answer and the list of dominoes otherwise.
/// The dominoes are only checked for syntax, see `verify_tiling` for the rest.
pub fn parse_tiling(text: &str) -> Result<Option<Vec<Domino>>, TilingError> {
    let domino_regex = u!(Regex::new(
        r"^\(\s*(\d+)\s*,\s*(\d+)\s*\)\s*\(\s*(\d+)\s*,\s*(\d+)\s*\)$"
    ));

    let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());
    let (_, header) = lines.next().ok_or(TilingError::EmptyInput)?;
    match header.trim() {
        IMPOSSIBLE => return Ok(None),
        POSSIBLE => {}
        other => return Err(TilingError::InvalidHeader(other.to_owned())),
    }

    let mut dominoes = Vec::new();
    for (i, line) in lines {
        let line = line.trim();
        let invalid = || TilingError::InvalidDomino {
            line: i + 1,
            text: line.to_owned(),
        };
        let captures = domino_regex.captures(line).ok_or_else(invalid)?;
        let mut coordinates = [0usize; 4];
        for (j, coordinate) in coordinates.iter_mut().enumerate() {
            let value = captures[j + 1].parse::<usize>().map_err(|_| invalid())?;
            // One-based coordinates.
            *coordinate = value.checked_sub(1).ok_or_else(invalid)?;
        }
        dominoes.push(Domino::from_cells(
            GridXY::new(coordinates[0], coordinates[1]),
            GridXY::new(coordinates[2], coordinates[3]),
        ));
    }
    Ok(Some(dominoes))
}

#[cfg(test)]
mod tests {
    use crate::errors::TilingError;
    use crate::geometry::grid_xy::GridXY;
    use crate::tiling::board::Board;
    use crate::tiling::solution::{Domino, ImpossibleReason, Tiling};
    use crate::tiling::text_format::{format_tiling, parse_board, parse_tiling};
    use std::error::Error;

    #[test]
    fn test_parse_board() -> Result<(), Box<dyn Error>> {
        let board = parse_board("3\n110\n011\n000\n")?;
        assert_eq!(board, Board::from_pattern(&["110", "011", "000"])?);
        Ok(())
    }

    #[test]
    fn test_parse_board_with_crlf_and_padding() -> Result<(), Box<dyn Error>> {
        let board = parse_board(" 2 \r\n11\r\n01\r\n")?;
        assert_eq!(board.open_count(), 3);
        Ok(())
    }

    #[test]
    fn test_parse_board_ignores_characters_past_size() -> Result<(), Box<dyn Error>> {
        let board = parse_board("2\n110\n0111\n")?;
        assert_eq!(board, Board::from_pattern(&["11", "01"])?);
        Ok(())
    }

    #[test]
    fn test_parse_board_nonpositive_size() {
        assert_eq!(parse_board("0\n"), Ok(Board::new(0)));
        assert_eq!(parse_board("-4\n111\n"), Ok(Board::new(0)));
    }

    #[test]
    fn test_parse_board_errors() {
        assert_eq!(parse_board(""), Err(TilingError::EmptyInput));
        assert_eq!(parse_board("two\n"), Err(TilingError::InvalidSize("two".to_owned())));
        assert_eq!(
            parse_board("3\n111\n111\n"),
            Err(TilingError::MissingRows { expected: 3, found: 2 })
        );
        assert_eq!(
            parse_board("2\n11\n1\n"),
            Err(TilingError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_format_tiling() {
        let tiling = Tiling::Matching(vec![
            Domino::new(GridXY::new(0, 0), GridXY::new(1, 0)),
            Domino::new(GridXY::new(1, 1), GridXY::new(0, 1)),
        ]);
        assert_eq!(format_tiling(&tiling), "1\n(1,1)(2,1)\n(2,2)(1,2)\n");
        let tiling = Tiling::Impossible(ImpossibleReason::InsufficientFlow { flow: 1, required: 2 });
        assert_eq!(format_tiling(&tiling), "0\n");
        assert_eq!(format_tiling(&Tiling::Matching(Vec::new())), "1\n");
    }

    #[test]
    fn test_parse_tiling() -> Result<(), Box<dyn Error>> {
        assert_eq!(parse_tiling("0\n")?, None);
        assert_eq!(
            parse_tiling("1\n(1,2)(1,1)\n( 3 ,4)(3,3)\n\n")?,
            Some(vec![
                Domino::new(GridXY::new(0, 0), GridXY::new(0, 1)),
                Domino::new(GridXY::new(2, 2), GridXY::new(2, 3)),
            ])
        );
        Ok(())
    }

    #[test]
    fn test_parse_tiling_errors() {
        assert_eq!(parse_tiling("\n"), Err(TilingError::EmptyInput));
        assert_eq!(parse_tiling("yes\n"), Err(TilingError::InvalidHeader("yes".to_owned())));
        assert_eq!(
            parse_tiling("1\n(1,1)(1,2)\n(1,1)-(2,1)\n"),
            Err(TilingError::InvalidDomino {
                line: 3,
                text: "(1,1)-(2,1)".to_owned()
            })
        );
        assert_eq!(
            parse_tiling("1\n(0,1)(1,1)\n"),
            Err(TilingError::InvalidDomino {
                line: 2,
                text: "(0,1)(1,1)".to_owned()
            })
        );
    }
}
