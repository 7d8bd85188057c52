//! Covering boards with dominoes.
//!
//! A board is a square grid of open and blocked cells. It can be covered by dominoes when its open
//! cells have a perfect matching in the grid adjacency graph. Coloring the board like a chessboard
//! makes that graph bipartite, and the matching is found as a maximum flow from a source through
//! black cells and white cells to a sink.

pub mod algorithms;
pub mod config;
pub mod consts;
pub mod errors;
pub mod geometry;
pub mod logging;
pub mod tiling;
pub mod unwrap;
mod utils;

pub use crate::algorithms::augmenting_path::SearchStrategy;
pub use crate::config::SolverConfig;
pub use crate::errors::{TilingError, TilingViolation};
pub use crate::geometry::grid_xy::GridXY;
pub use crate::tiling::board::{Board, Cell};
pub use crate::tiling::solution::{Domino, ImpossibleReason, Tiling};
pub use crate::tiling::solver::{maximum_matching, solve, tile};
pub use crate::tiling::verify::verify_tiling;
