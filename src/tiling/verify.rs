use crate::algorithms::grid_matrix::GridMatrix;
use crate::algorithms::matrix_common::MatrixCommon;
use crate::errors::TilingViolation;
use crate::geometry::grid_xy::GridXY;
use crate::tiling::board::Board;
use crate::tiling::solution::Domino;
use rustc_hash::FxHashSet;

/// Checks that the dominoes cover every open cell of the board exactly once and nothing else.
/// Coverage is counted in a separate matrix, the board is left untouched.
pub fn verify_tiling(board: &Board, dominoes: &[Domino]) -> Result<(), TilingViolation> {
    let size = board.size();
    let mut coverage = GridMatrix::new(size, 0u8);
    let mut placed = FxHashSet::default();

    for domino in dominoes.iter() {
        for xy in domino.cells() {
            if !xy.inside(size) {
                return Err(TilingViolation::OutOfBounds(xy));
            }
            if !board.is_open(xy) {
                return Err(TilingViolation::BlockedCell(xy));
            }
        }
        if !domino.black.is_adjacent(domino.white) {
            return Err(TilingViolation::NotAdjacent(domino.black, domino.white));
        }
        if !placed.insert(unordered(domino)) {
            return Err(TilingViolation::DuplicateDomino(domino.black, domino.white));
        }
        for xy in domino.cells() {
            let count = coverage.get(xy) + 1;
            if count > 1 {
                return Err(TilingViolation::CoveredTwice(xy));
            }
            coverage.set(xy, count);
        }
    }

    match board.open_cells().find(|&xy| coverage.get(xy) == 0) {
        Some(xy) => Err(TilingViolation::Uncovered(xy)),
        None => Ok(()),
    }
}

fn unordered(domino: &Domino) -> (GridXY, GridXY) {
    if domino.black <= domino.white {
        (domino.black, domino.white)
    } else {
        (domino.white, domino.black)
    }
}
