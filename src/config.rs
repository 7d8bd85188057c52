use crate::algorithms::augmenting_path::SearchStrategy;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Smallest board side the solver accepts.
pub const MIN_GRID_SIZE: usize = 1;
/// Default largest board side the solver accepts.
/// A board of this size has about a million nodes and four million edges in its flow network.
/// Solving a fully open board this large takes well over an hour, see `SolverConfig::max_grid_size`.
pub const DEFAULT_MAX_GRID_SIZE: usize = 1000;

/// Parameters of a single `solve` call.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest accepted board side. Memory grows as O(n^2) nodes and edges, a single augmenting
    /// path search takes O(n^2) and there are at most n^2 / 2 augmentations, so time grows as O(n^4).
    ///
    /// Measured on fully open boards in a release build:
    ///
    /// | n   | breadth-first | depth-first |
    /// |-----|---------------|-------------|
    /// | 100 | 0.34 s        | 0.13 s      |
    /// | 200 | 7.1 s         | 3.9 s       |
    /// | 300 | 40.5 s        | 19.3 s      |
    ///
    /// At the default of 1000 a fully open board takes more than an hour. Lower the limit when
    /// answers are needed quickly.
    pub max_grid_size: usize,
    /// How augmenting paths are found.
    pub search: SearchStrategy,
    /// Whether the produced covering is checked by an independent pass before being returned.
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_grid_size: DEFAULT_MAX_GRID_SIZE,
            search: SearchStrategy::default(),
            verify: true,
        }
    }
}

impl SolverConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
