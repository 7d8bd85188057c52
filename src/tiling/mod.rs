pub mod answer;
pub mod board;
pub mod solution;
pub mod solver;
pub mod text_format;
pub mod verify;
