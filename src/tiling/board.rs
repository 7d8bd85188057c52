use crate::algorithms::grid_matrix::GridMatrix;
use crate::algorithms::matrix_common::MatrixCommon;
use crate::errors::TilingError;
use crate::geometry::grid_xy::GridXY;
use std::fmt::{Display, Formatter};

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    Open,
    #[default]
    Blocked,
}

/// A square board with open cells that need to be covered and blocked cells that must stay
/// uncovered.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    cells: GridMatrix<Cell>,
}

impl Board {
    /// A board with all cells blocked.
    pub fn new(size: usize) -> Self {
        Board {
            cells: GridMatrix::new(size, Cell::Blocked),
        }
    }

    pub fn filled(size: usize, cell: Cell) -> Self {
        Board {
            cells: GridMatrix::new(size, cell),
        }
    }

    /// Builds a board out of `size` rows of `size` characters each, where `'1'` is an open cell and
    /// any other character is blocked.
    pub fn from_pattern<S>(rows: &[S]) -> Result<Self, TilingError>
    where
        S: AsRef<str>,
    {
        let size = rows.len();
        let mut board = Board::new(size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref().trim_end();
            let found = line.chars().count();
            if found != size {
                return Err(TilingError::RaggedRow {
                    row,
                    expected: size,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                if c == '1' {
                    board.set(GridXY::new(row, col), Cell::Open);
                }
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    #[inline]
    pub fn get(&self, xy: GridXY) -> Cell {
        self.cells.get(xy)
    }

    #[inline]
    pub fn set(&mut self, xy: GridXY, cell: Cell) {
        self.cells.set(xy, cell);
    }

    /// Whether the cell is on the board and open.
    #[inline]
    pub fn is_open(&self, xy: GridXY) -> bool {
        xy.inside(self.size()) && self.cells.get(xy) == Cell::Open
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = GridXY> + '_ {
        self.cells.iter().filter_map(|(xy, cell)| (cell == Cell::Open).then_some(xy))
    }

    pub fn open_count(&self) -> usize {
        self.open_cells().count()
    }

    pub fn map_cells<F, S>(&self, f: F) -> GridMatrix<S>
    where
        F: FnMut(GridXY, Cell) -> S,
        S: Clone + Copy + PartialEq,
    {
        self.cells.map(f)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let c = match self.get(GridXY::new(row, col)) {
                    Cell::Open => '1',
                    Cell::Blocked => '0',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
