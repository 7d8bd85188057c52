use crate::algorithms::flow_network::{EdgeId, FlowNetwork, NodeId};
use derive_more::Display;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::str::FromStr;

/// Predecessor edge of a node not reached by the search.
pub const UNVISITED: EdgeId = EdgeId(u32::MAX);
/// Predecessor edge of the source, which is where every path starts.
pub const PATH_ROOT: EdgeId = EdgeId(u32::MAX - 1);

/// A way of finding a path from the source to the sink through edges with positive residual
/// capacity.
pub trait AugmentingPathSearch {
    /// Returns edges of an augmenting path, ordered from the sink back to the source, or `None` if
    /// the sink is not reachable.
    fn find_path(&mut self, network: &FlowNetwork) -> Option<Vec<EdgeId>>;
}

/// Order in which the residual graph is explored. Both give a maximum flow, but only breadth-first
/// search bounds the number of augmentations independently of the capacities.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Sequence, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    #[default]
    #[display(fmt = "breadth-first")]
    BreadthFirst,
    #[display(fmt = "depth-first")]
    DepthFirst,
}

impl SearchStrategy {
    pub fn searcher(self, node_count: usize) -> Box<dyn AugmentingPathSearch> {
        match self {
            SearchStrategy::BreadthFirst => Box::new(BreadthFirstSearch::new(node_count)),
            SearchStrategy::DepthFirst => Box::new(DepthFirstSearch::new(node_count)),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Ok(SearchStrategy::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" => Ok(SearchStrategy::DepthFirst),
            _ => Err(format!("unknown search strategy {:?}, expected bfs or dfs", s)),
        }
    }
}

/// Queue-based search, finds a shortest augmenting path.
pub struct BreadthFirstSearch {
    predecessors: Vec<EdgeId>,
    queue: VecDeque<NodeId>,
}

impl BreadthFirstSearch {
    pub fn new(node_count: usize) -> Self {
        BreadthFirstSearch {
            predecessors: vec![UNVISITED; node_count],
            queue: VecDeque::new(),
        }
    }
}

impl AugmentingPathSearch for BreadthFirstSearch {
    fn find_path(&mut self, network: &FlowNetwork) -> Option<Vec<EdgeId>> {
        self.predecessors.fill(UNVISITED);
        self.queue.clear();

        let (source, sink) = (network.source(), network.sink());
        self.predecessors[source.usize()] = PATH_ROOT;
        self.queue.push_back(source);

        'search: while let Some(node) = self.queue.pop_front() {
            for &edge_id in network.out_edges(node) {
                let edge = network.edge(edge_id);
                if self.predecessors[edge.target.usize()] != UNVISITED || edge.residual() <= 0 {
                    continue;
                }
                self.predecessors[edge.target.usize()] = edge_id;
                if edge.target == sink {
                    break 'search;
                }
                self.queue.push_back(edge.target);
            }
        }

        trace_path(network, &self.predecessors)
    }
}

/// Stack-based search. Nodes are marked when pushed, so every node enters the stack at most once.
pub struct DepthFirstSearch {
    predecessors: Vec<EdgeId>,
    stack: Vec<NodeId>,
}

impl DepthFirstSearch {
    pub fn new(node_count: usize) -> Self {
        DepthFirstSearch {
            predecessors: vec![UNVISITED; node_count],
            stack: Vec::new(),
        }
    }
}

impl AugmentingPathSearch for DepthFirstSearch {
    fn find_path(&mut self, network: &FlowNetwork) -> Option<Vec<EdgeId>> {
        self.predecessors.fill(UNVISITED);
        self.stack.clear();

        let (source, sink) = (network.source(), network.sink());
        self.predecessors[source.usize()] = PATH_ROOT;
        self.stack.push(source);

        'search: while let Some(node) = self.stack.pop() {
            for &edge_id in network.out_edges(node) {
                let edge = network.edge(edge_id);
                if self.predecessors[edge.target.usize()] != UNVISITED || edge.residual() <= 0 {
                    continue;
                }
                self.predecessors[edge.target.usize()] = edge_id;
                if edge.target == sink {
                    break 'search;
                }
                self.stack.push(edge.target);
            }
        }

        trace_path(network, &self.predecessors)
    }
}

/// Follows predecessor edges from the sink back to the source.
fn trace_path(network: &FlowNetwork, predecessors: &[EdgeId]) -> Option<Vec<EdgeId>> {
    let mut edge = predecessors[network.sink().usize()];
    if edge == UNVISITED {
        return None;
    }

    let mut path = Vec::new();
    while edge != PATH_ROOT {
        path.push(edge);
        edge = predecessors[network.edge_origin(edge).usize()];
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use crate::algorithms::augmenting_path::{AugmentingPathSearch, SearchStrategy};
    use crate::algorithms::flow_network::{FlowNetwork, NodeId};
    use enum_iterator::all;

    /// 0 -> 1 -> 3 and 0 -> 2 -> 4 -> 3, so the shortest path goes through 1.
    fn two_routes(short_route_first: bool) -> FlowNetwork {
        let mut network = FlowNetwork::new(5, NodeId(0), NodeId(3));
        if short_route_first {
            network.add_edge(NodeId(0), NodeId(1), 1);
            network.add_edge(NodeId(0), NodeId(2), 1);
        } else {
            network.add_edge(NodeId(0), NodeId(2), 1);
            network.add_edge(NodeId(0), NodeId(1), 1);
        }
        network.add_edge(NodeId(2), NodeId(4), 1);
        network.add_edge(NodeId(4), NodeId(3), 1);
        network.add_edge(NodeId(1), NodeId(3), 1);
        network
    }

    fn path_nodes(network: &FlowNetwork, strategy: SearchStrategy) -> Option<Vec<NodeId>> {
        let mut searcher = strategy.searcher(network.node_count());
        searcher.find_path(network).map(|path| {
            let mut nodes = path.iter().map(|&edge| network.edge(edge).target).collect::<Vec<_>>();
            nodes.push(network.source());
            nodes.reverse();
            nodes
        })
    }

    #[test]
    fn test_breadth_first_finds_shortest_path() {
        for short_route_first in [false, true] {
            let network = two_routes(short_route_first);
            assert_eq!(
                path_nodes(&network, SearchStrategy::BreadthFirst),
                Some(vec![NodeId(0), NodeId(1), NodeId(3)])
            );
        }
    }

    #[test]
    fn test_depth_first_follows_last_pushed_node() {
        let network = two_routes(false);
        assert_eq!(
            path_nodes(&network, SearchStrategy::DepthFirst),
            Some(vec![NodeId(0), NodeId(1), NodeId(3)])
        );
        let network = two_routes(true);
        assert_eq!(
            path_nodes(&network, SearchStrategy::DepthFirst),
            Some(vec![NodeId(0), NodeId(2), NodeId(4), NodeId(3)])
        );
    }

    #[test]
    fn test_saturated_edges_are_skipped() {
        for strategy in all::<SearchStrategy>() {
            let mut network = two_routes(false);
            // The edge 1 -> 3, after the residual twin of 0 -> 1.
            let edge = network.out_edges(NodeId(1))[1];
            network.push_flow(edge, 1);
            assert_eq!(
                path_nodes(&network, strategy),
                Some(vec![NodeId(0), NodeId(2), NodeId(4), NodeId(3)]),
                "{}",
                strategy
            );
        }
    }

    #[test]
    fn test_unreachable_sink() {
        for strategy in all::<SearchStrategy>() {
            let mut network = FlowNetwork::new(3, NodeId(0), NodeId(2));
            network.add_edge(NodeId(0), NodeId(1), 1);
            network.add_edge(NodeId(2), NodeId(1), 1);
            assert_eq!(path_nodes(&network, strategy), None);
        }
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("bfs".parse::<SearchStrategy>(), Ok(SearchStrategy::BreadthFirst));
        assert_eq!("Depth-First".parse::<SearchStrategy>(), Ok(SearchStrategy::DepthFirst));
        assert!("astar".parse::<SearchStrategy>().is_err());
        assert_eq!(format!("{}", SearchStrategy::DepthFirst), "depth-first");
    }
}
