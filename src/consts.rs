use crate::algorithms::flow_network::Capacity;

/// Capacity of every forward edge in a tiling network. Each cell can be covered by one domino only
/// and this bounds all paths, so the black to white edges need no more either.
pub const UNIT_CAPACITY: Capacity = 1;

/// Capacity of the residual twin of a forward edge.
pub const RESIDUAL_CAPACITY: Capacity = 0;
