use crate::geometry::grid_direction::{direction_to_offset, GridDirection};
use derive_more::{Constructor, Display};
use enum_iterator::all;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Zero-based coordinates of a cell on a square board.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor, Display, Serialize, Deserialize,
)]
#[display(fmt = "({},{})", row, col)]
pub struct GridXY {
    pub row: usize,
    pub col: usize,
}

impl GridXY {
    /// 0 for black cells, 1 for white ones.
    #[inline]
    pub fn parity(self) -> usize {
        (self.row + self.col) % 2
    }

    #[inline]
    pub fn inside(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index on a board with given side.
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// The neighbouring cell in given direction, if it is still on the board.
    pub fn step(self, direction: GridDirection, size: usize) -> Option<GridXY> {
        let (dr, dc) = direction_to_offset(direction);
        let near = GridXY::new(self.row.checked_add_signed(dr)?, self.col.checked_add_signed(dc)?);
        near.inside(size).then_some(near)
    }

    /// Orthogonal neighbours on the board in `GridDirection` order.
    pub fn around(self, size: usize) -> impl Iterator<Item = GridXY> {
        all::<GridDirection>().filter_map(move |direction| self.step(direction, size))
    }

    pub fn is_adjacent(self, other: GridXY) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Displays as `(row,col)` counted from 1, the way cells appear in board and answer files.
    #[inline]
    pub fn one_based(self) -> OneBased {
        OneBased(self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OneBased(pub GridXY);

impl Display for OneBased {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0.row + 1, self.0.col + 1)
    }
}
