use crate::algorithms::matrix_common::MatrixCommon;
use crate::geometry::grid_xy::GridXY;

/// A `size` x `size` matrix stored in row-major order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridMatrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T> GridMatrix<T>
where
    T: Clone + Copy + PartialEq,
{
    pub fn new(size: usize, fill: T) -> Self {
        GridMatrix {
            size,
            data: vec![fill; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells with their values, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (GridXY, T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &value)| (GridXY::new(i / self.size, i % self.size), value))
    }

    pub fn map<F, S>(&self, mut f: F) -> GridMatrix<S>
    where
        F: FnMut(GridXY, T) -> S,
        S: Clone + Copy + PartialEq,
    {
        GridMatrix {
            size: self.size,
            data: self.iter().map(|(xy, value)| f(xy, value)).collect(),
        }
    }
}

impl<T> MatrixCommon<T> for GridMatrix<T>
where
    T: Clone + Copy + PartialEq,
{
    #[inline]
    fn get(&self, xy: GridXY) -> T {
        self.data[xy.to_index(self.size)]
    }

    #[inline]
    fn set(&mut self, xy: GridXY, value: T) {
        self.data[xy.to_index(self.size)] = value;
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::grid_matrix::GridMatrix;
    use crate::algorithms::matrix_common::MatrixCommon;
    use crate::geometry::grid_xy::GridXY;

    #[test]
    fn test_get_set() {
        let mut matrix = GridMatrix::new(3, 0u8);
        matrix.set(GridXY::new(2, 1), 5);
        assert_eq!(matrix.get(GridXY::new(2, 1)), 5);
        assert_eq!(matrix.get(GridXY::new(1, 2)), 0);
    }

    #[test]
    fn test_iter_is_row_major() {
        let matrix = GridMatrix::new(2, ());
        assert_eq!(
            matrix.iter().map(|(xy, _)| xy).collect::<Vec<_>>(),
            vec![GridXY::new(0, 0), GridXY::new(0, 1), GridXY::new(1, 0), GridXY::new(1, 1)]
        );
    }

    #[test]
    fn test_map() {
        let matrix = GridMatrix::new(2, 1u32).map(|xy, value| value + xy.row as u32 * 10 + xy.col as u32);
        assert_eq!(matrix.get(GridXY::new(1, 0)), 11);
        assert_eq!(matrix.get(GridXY::new(0, 1)), 2);
    }

    #[test]
    fn test_empty() {
        let matrix = GridMatrix::new(0, false);
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.iter().count(), 0);
    }
}
