use crate::algorithms::checkerboard::{CellColor, Classification};
use crate::consts::{RESIDUAL_CAPACITY, UNIT_CAPACITY};
use crate::geometry::grid_xy::GridXY;
use crate::tiling::board::Board;
use log::debug;
use more_asserts::{debug_assert_ge, debug_assert_le};
use std::fmt::{Display, Formatter};

pub type Capacity = i32;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Forward edges have even IDs and their residual twins the following odd ones, so the reverse of
/// an edge is obtained by flipping the lowest bit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct EdgeId(pub u32);

impl EdgeId {
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn reverse(self) -> EdgeId {
        EdgeId(self.0 ^ 1)
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        self.0 & 1 == 0
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub capacity: Capacity,
    /// Flow through the edge. Negative on residual edges, where it mirrors the forward edge.
    pub flow: Capacity,
}

impl Edge {
    #[inline]
    pub fn residual(&self) -> Capacity {
        self.capacity - self.flow
    }
}

/// A sparse directed graph with paired forward and residual edges between a source and a sink.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    edges: Vec<Edge>,
    /// Outgoing edges (forward and residual) of each node in insertion order.
    adjacency: Vec<Vec<EdgeId>>,
    source: NodeId,
    sink: NodeId,
}

impl FlowNetwork {
    pub fn new(node_count: usize, source: NodeId, sink: NodeId) -> Self {
        debug_assert!(source.usize() < node_count && sink.usize() < node_count && source != sink);
        FlowNetwork {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
            source,
            sink,
        }
    }

    /// Adds an edge with given capacity and its residual twin with no capacity. Returns the ID of
    /// the forward edge.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) -> EdgeId {
        debug_assert_ge!(capacity, 0);
        let forward = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            target: to,
            capacity,
            flow: 0,
        });
        self.edges.push(Edge {
            target: from,
            capacity: RESIDUAL_CAPACITY,
            flow: 0,
        });
        self.adjacency[from.usize()].push(forward);
        self.adjacency[to.usize()].push(forward.reverse());
        forward
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, not counting residual ones.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    #[inline]
    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.usize()]
    }

    /// The node the edge starts in.
    #[inline]
    pub fn edge_origin(&self, edge: EdgeId) -> NodeId {
        self.edges[edge.reverse().usize()].target
    }

    #[inline]
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency[node.usize()]
    }

    /// Outgoing forward edges of the node.
    pub fn forward_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.adjacency[node.usize()]
            .iter()
            .filter(|edge| edge.is_forward())
            .map(|&edge| (edge, self.edge(edge)))
    }

    /// Pushes `amount` of flow through the edge, taking it back from its twin.
    pub fn push_flow(&mut self, edge: EdgeId, amount: Capacity) {
        self.edges[edge.usize()].flow += amount;
        self.edges[edge.reverse().usize()].flow -= amount;

        debug_assert_le!(self.edges[edge.usize()].flow, self.edges[edge.usize()].capacity);
        debug_assert_le!(
            self.edges[edge.reverse().usize()].flow,
            self.edges[edge.reverse().usize()].capacity
        );
    }

    /// Total flow on forward edges entering the node.
    pub fn inflow(&self, node: NodeId) -> Capacity {
        self.out_edges(node)
            .iter()
            .filter(|edge| !edge.is_forward())
            .map(|&edge| self.edge(edge.reverse()).flow)
            .sum()
    }

    /// Total flow on forward edges leaving the node.
    pub fn outflow(&self, node: NodeId) -> Capacity {
        self.forward_edges(node).map(|(_, edge)| edge.flow).sum()
    }
}

/// Node IDs of a flow network built over a board with given side. Cell IDs have one row and one
/// column of padding, so all of them are below `(size + 1)^2`. The source and sink follow them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridNodes {
    size: usize,
}

impl GridNodes {
    pub fn new(size: usize) -> Self {
        GridNodes { size }
    }

    #[inline]
    fn stride(self) -> usize {
        self.size + 1
    }

    #[inline]
    pub fn cell(self, xy: GridXY) -> NodeId {
        NodeId(((xy.row + 1) * self.stride() + xy.col + 1) as u32)
    }

    /// The cell with given node ID. `None` for the source, sink and IDs used as padding.
    pub fn cell_of(self, node: NodeId) -> Option<GridXY> {
        let id = node.usize();
        if id >= self.stride() * self.stride() {
            return None;
        }
        let (row, col) = (id / self.stride(), id % self.stride());
        (row >= 1 && col >= 1).then(|| GridXY::new(row - 1, col - 1))
    }

    #[inline]
    pub fn source(self) -> NodeId {
        NodeId((self.stride() * self.stride()) as u32)
    }

    #[inline]
    pub fn sink(self) -> NodeId {
        NodeId((self.stride() * self.stride() + 1) as u32)
    }

    #[inline]
    pub fn count(self) -> usize {
        self.stride() * self.stride() + 2
    }
}

/// Builds the network source -> black cells -> white cells -> sink with unit capacities.
/// Black cells are connected to their open orthogonal neighbours, which are all white.
pub fn build_tiling_network(board: &Board, classification: &Classification, nodes: &GridNodes) -> FlowNetwork {
    let size = board.size();
    let mut network = FlowNetwork::new(nodes.count(), nodes.source(), nodes.sink());

    for xy in board.open_cells() {
        let node = nodes.cell(xy);
        match classification.color(xy) {
            Some(CellColor::Black) => {
                network.add_edge(nodes.source(), node, UNIT_CAPACITY);
                for near in xy.around(size) {
                    if board.is_open(near) {
                        debug_assert_eq!(classification.color(near), Some(CellColor::White));
                        network.add_edge(node, nodes.cell(near), UNIT_CAPACITY);
                    }
                }
            }
            Some(CellColor::White) => {
                network.add_edge(node, nodes.sink(), UNIT_CAPACITY);
            }
            None => unreachable!(),
        }
    }

    debug!(
        "Built a flow network with {} nodes and {} edges for {} black and {} white cells.",
        network.node_count(),
        network.edge_count(),
        classification.black_count,
        classification.white_count
    );

    network
}
