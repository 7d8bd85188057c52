use crate::algorithms::augmenting_path::SearchStrategy;
use crate::algorithms::checkerboard::{classify, Classification};
use crate::algorithms::flow_network::{build_tiling_network, Capacity, FlowNetwork, GridNodes};
use crate::algorithms::matching::{extract_matching, saturated_dominoes};
use crate::algorithms::max_flow::max_flow;
use crate::config::{SolverConfig, MIN_GRID_SIZE};
use crate::errors::TilingError;
use crate::tiling::board::Board;
use crate::tiling::solution::{Domino, ImpossibleReason, Tiling};
use crate::tiling::verify::verify_tiling;
use log::{debug, error, info};

/// Decides whether the board can be covered by dominoes and finds a covering if so.
/// Boards with side outside of `MIN_GRID_SIZE..=config.max_grid_size` are rejected.
pub fn solve(board: &Board, config: &SolverConfig) -> Result<Tiling, TilingError> {
    let size = board.size();
    if size < MIN_GRID_SIZE {
        return Err(TilingError::GridTooSmall {
            size,
            min: MIN_GRID_SIZE,
        });
    }
    if size > config.max_grid_size {
        return Err(TilingError::GridTooLarge {
            size,
            max: config.max_grid_size,
        });
    }

    let tiling = tile(board, config.search);

    if config.verify {
        if let Some(dominoes) = tiling.dominoes() {
            if let Err(violation) = verify_tiling(board, dominoes) {
                error!("The covering found for a board of size {} is invalid: {}.", size, violation);
                return Err(violation.into());
            }
        }
    }

    Ok(tiling)
}

/// Finds a covering of a board, which is the perfect matching between its black and white open
/// cells, as a maximum flow.
pub fn tile(board: &Board, search: SearchStrategy) -> Tiling {
    let classification = classify(board);
    debug!(
        "Board of size {} has {} black and {} white open cells.",
        board.size(),
        classification.black_count,
        classification.white_count
    );

    if !classification.is_balanced() {
        info!(
            "The board cannot be covered, it has {} black and {} white cells.",
            classification.black_count, classification.white_count
        );
        return Tiling::Impossible(ImpossibleReason::UnbalancedColors {
            black: classification.black_count,
            white: classification.white_count,
        });
    }

    let (network, nodes, flow) = solve_flow(board, &classification, search);
    let tiling = extract_matching(&network, &nodes, &classification, flow);
    match &tiling {
        Tiling::Matching(dominoes) => info!("The board can be covered by {} dominoes.", dominoes.len()),
        Tiling::Impossible(_) => info!(
            "The board cannot be covered, at most {} of {} dominoes fit.",
            flow, classification.black_count
        ),
    }
    tiling
}

/// A maximum matching of the board's open cells, which does not need to cover all of them.
pub fn maximum_matching(board: &Board, search: SearchStrategy) -> Vec<Domino> {
    let classification = classify(board);
    let (network, nodes, _) = solve_flow(board, &classification, search);
    saturated_dominoes(&network, &nodes, &classification)
}

fn solve_flow(
    board: &Board,
    classification: &Classification,
    search: SearchStrategy,
) -> (FlowNetwork, GridNodes, Capacity) {
    let nodes = GridNodes::new(board.size());
    let mut network = build_tiling_network(board, classification, &nodes);
    let mut searcher = search.searcher(network.node_count());
    let flow = max_flow(&mut network, searcher.as_mut());
    (network, nodes, flow)
}
