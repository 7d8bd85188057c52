// Algorithms and data structures.
pub mod matrix_common;
pub mod grid_matrix;
pub mod checkerboard;
pub mod flow_network;
pub mod augmenting_path;
pub mod max_flow;
pub mod matching;
