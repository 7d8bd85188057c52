use crate::algorithms::grid_matrix::GridMatrix;
use crate::algorithms::matrix_common::MatrixCommon;
use crate::geometry::grid_xy::GridXY;
use crate::tiling::board::{Board, Cell};
use serde::{Deserialize, Serialize};

/// Color of a cell in the checkerboard coloring. Each domino covers one cell of each color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CellColor {
    Black,
    White,
}

impl CellColor {
    #[inline]
    pub fn of(xy: GridXY) -> Self {
        if xy.parity() == 0 {
            CellColor::Black
        } else {
            CellColor::White
        }
    }
}

/// Colors of open cells of a board together with the number of cells of each color.
#[derive(Debug, Clone)]
pub struct Classification {
    /// `None` for blocked cells.
    pub colors: GridMatrix<Option<CellColor>>,
    pub black_count: usize,
    pub white_count: usize,
}

impl Classification {
    /// A perfect matching between the colors may only exist when this holds.
    pub fn is_balanced(&self) -> bool {
        self.black_count == self.white_count
    }

    #[inline]
    pub fn color(&self, xy: GridXY) -> Option<CellColor> {
        self.colors.get(xy)
    }

    /// Open cells of given color in row-major order.
    pub fn cells_of(&self, color: CellColor) -> impl Iterator<Item = GridXY> + '_ {
        self.colors
            .iter()
            .filter_map(move |(xy, cell_color)| (cell_color == Some(color)).then_some(xy))
    }
}

pub fn classify(board: &Board) -> Classification {
    let mut black_count = 0;
    let mut white_count = 0;

    let colors = board.map_cells(|xy, cell| {
        if cell == Cell::Blocked {
            return None;
        }
        let color = CellColor::of(xy);
        match color {
            CellColor::Black => black_count += 1,
            CellColor::White => white_count += 1,
        }
        Some(color)
    });

    Classification {
        colors,
        black_count,
        white_count,
    }
}
