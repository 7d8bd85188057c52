use crate::geometry::grid_direction::GridDirection::*;
use enum_iterator::Sequence;

/// Orthogonal directions on the board, in the order in which neighbours of a cell are visited.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Sequence)]
#[repr(u8)]
pub enum GridDirection {
    Left = 0,
    Top = 1,
    Bottom = 2,
    Right = 3,
}

/// Offset in (row, column) order.
#[inline]
pub fn direction_to_offset(direction: GridDirection) -> (isize, isize) {
    match direction {
        Left => (0, -1),
        Top => (-1, 0),
        Bottom => (1, 0),
        Right => (0, 1),
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::grid_direction::{direction_to_offset, GridDirection};
    use enum_iterator::all;

    #[test]
    fn test_direction_order() {
        assert_eq!(
            all::<GridDirection>().collect::<Vec<_>>(),
            vec![GridDirection::Left, GridDirection::Top, GridDirection::Bottom, GridDirection::Right]
        );
    }

    #[test]
    fn test_offsets_are_orthogonal_units() {
        for direction in all::<GridDirection>() {
            let (dr, dc) = direction_to_offset(direction);
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
        let sum = all::<GridDirection>()
            .map(direction_to_offset)
            .fold((0, 0), |(r, c), (dr, dc)| (r + dr, c + dc));
        assert_eq!(sum, (0, 0));
    }
}
