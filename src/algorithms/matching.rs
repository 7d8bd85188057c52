use crate::algorithms::checkerboard::{CellColor, Classification};
use crate::algorithms::flow_network::{Capacity, FlowNetwork, GridNodes};
use crate::tiling::solution::{Domino, ImpossibleReason, Tiling};
use log::debug;

/// Dominoes corresponding to black to white edges with flow through them, with black cells in
/// row-major order and their neighbours in `GridDirection` order.
pub fn saturated_dominoes(network: &FlowNetwork, nodes: &GridNodes, classification: &Classification) -> Vec<Domino> {
    let mut dominoes = Vec::new();
    for black in classification.cells_of(CellColor::Black) {
        for (_, edge) in network.forward_edges(nodes.cell(black)) {
            if edge.flow != 1 {
                continue;
            }
            if let Some(white) = nodes.cell_of(edge.target) {
                dominoes.push(Domino::new(black, white));
            }
        }
    }
    dominoes
}

/// Reads the covering out of a network with maximum flow `flow`. The board can be covered only
/// if every black cell (and therefore every white one) is matched.
pub fn extract_matching(
    network: &FlowNetwork,
    nodes: &GridNodes,
    classification: &Classification,
    flow: Capacity,
) -> Tiling {
    debug_assert_eq!(network.inflow(network.sink()), flow);

    let required = classification.black_count;
    if flow as usize != required || flow as usize != classification.white_count {
        debug!("Flow {} does not match all {} black cells.", flow, required);
        return Tiling::Impossible(ImpossibleReason::InsufficientFlow { flow, required });
    }

    let dominoes = saturated_dominoes(network, nodes, classification);
    debug_assert_eq!(dominoes.len(), required);
    Tiling::Matching(dominoes)
}

#[cfg(test)]
mod tests {
    use crate::algorithms::augmenting_path::SearchStrategy;
    use crate::algorithms::checkerboard::classify;
    use crate::algorithms::flow_network::{build_tiling_network, GridNodes};
    use crate::algorithms::matching::{extract_matching, saturated_dominoes};
    use crate::algorithms::max_flow::max_flow;
    use crate::geometry::grid_xy::GridXY;
    use crate::tiling::board::Board;
    use crate::tiling::solution::{Domino, ImpossibleReason, Tiling};

    #[test]
    fn test_extract_full_2x2() {
        let board = Board::from_pattern(&["11", "11"]).unwrap();
        let classification = classify(&board);
        let nodes = GridNodes::new(2);
        let mut network = build_tiling_network(&board, &classification, &nodes);
        let flow = max_flow(&mut network, SearchStrategy::BreadthFirst.searcher(nodes.count()).as_mut());
        assert_eq!(flow, 2);
        assert_eq!(
            extract_matching(&network, &nodes, &classification, flow),
            Tiling::Matching(vec![
                Domino::new(GridXY::new(0, 0), GridXY::new(1, 0)),
                Domino::new(GridXY::new(1, 1), GridXY::new(0, 1)),
            ])
        );
    }

    #[test]
    fn test_extract_before_solving() {
        let board = Board::from_pattern(&["11", "00"]).unwrap();
        let classification = classify(&board);
        let nodes = GridNodes::new(2);
        let network = build_tiling_network(&board, &classification, &nodes);
        assert!(saturated_dominoes(&network, &nodes, &classification).is_empty());
        assert_eq!(
            extract_matching(&network, &nodes, &classification, 0),
            Tiling::Impossible(ImpossibleReason::InsufficientFlow { flow: 0, required: 1 })
        );
    }

    #[test]
    fn test_extract_partial_matching() {
        // Three black cells compete for the two white cells in the middle column.
        let board = Board::from_pattern(&["110", "010", "011"]).unwrap();
        let classification = classify(&board);
        assert_eq!((classification.black_count, classification.white_count), (3, 2));
        let nodes = GridNodes::new(3);
        let mut network = build_tiling_network(&board, &classification, &nodes);
        let flow = max_flow(&mut network, SearchStrategy::DepthFirst.searcher(nodes.count()).as_mut());
        assert_eq!(flow, 2);
        assert_eq!(saturated_dominoes(&network, &nodes, &classification).len(), 2);
        assert_eq!(
            extract_matching(&network, &nodes, &classification, flow),
            Tiling::Impossible(ImpossibleReason::InsufficientFlow { flow: 2, required: 3 })
        );
    }
}
