use crate::geometry::grid_xy::GridXY;

pub trait MatrixCommon<T> {
    fn get(&self, xy: GridXY) -> T;
    fn set(&mut self, xy: GridXY, value: T);
}
