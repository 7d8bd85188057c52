pub mod grid_direction;
pub mod grid_xy;
