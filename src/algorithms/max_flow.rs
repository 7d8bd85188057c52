use crate::algorithms::augmenting_path::AugmentingPathSearch;
use crate::algorithms::flow_network::{Capacity, FlowNetwork};
use crate::local_trace;
use log::debug;
use more_asserts::debug_assert_ge;

const DEBUG: bool = false;

/// Ford-Fulkerson method. Augments the flow along paths provided by `search` until none is left
/// and returns the value of the resulting maximum flow. Flows of the network's edges are updated
/// in place.
///
/// Each augmentation increases the flow by at least one, so the number of iterations is bounded
/// by the total capacity of edges leaving the source.
pub fn max_flow<S>(network: &mut FlowNetwork, search: &mut S) -> Capacity
where
    S: AugmentingPathSearch + ?Sized,
{
    let mut total_flow = 0;
    let mut augmentations = 0usize;

    while let Some(path) = search.find_path(network) {
        let Some(bottleneck) = path.iter().map(|&edge| network.edge(edge).residual()).min() else {
            break;
        };
        debug_assert_ge!(bottleneck, 1);

        for &edge in path.iter() {
            network.push_flow(edge, bottleneck);
        }

        total_flow += bottleneck;
        augmentations += 1;
        local_trace!(
            "Augmented {} along a path of {} edges, the flow is now {}.",
            bottleneck,
            path.len(),
            total_flow
        );
    }

    debug!(
        "Found maximum flow {} after {} augmenting paths.",
        total_flow, augmentations
    );

    total_flow
}
