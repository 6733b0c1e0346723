use crate::error::MazeError;

/// Packed `x * height + y` key into the node arena.
pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: (usize, usize),
    pub distance: usize, // Depth from the start node in the spanning tree.
    pub neighbors: Vec<NodeId>,
}

/// Undirected graph over a `width` x `height` cell lattice.
///
/// Nodes live in a dense arena indexed by [`NodeId`], so every coordinate
/// pair owns at most one slot. Edges are also kept as an ordered list of
/// `(from, to)` pairs, which the layout projector needs to know which wall
/// segment each edge carves.
#[derive(Clone, Debug)]
pub struct MazeGraph {
    width: usize,
    height: usize,
    nodes: Vec<Option<Node>>,
    edges: Vec<(NodeId, NodeId)>,
    node_count: usize,
}

impl MazeGraph {
    /// An empty graph with room for every cell of the lattice.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            nodes: vec![None; width * height],
            edges: Vec::new(),
            node_count: 0,
        })
    }

    /// The complete 4-connected grid graph: one node per cell, an edge between
    /// every pair of orthogonally adjacent cells, no wraparound.
    pub fn complete(width: usize, height: usize) -> Result<Self, MazeError> {
        let mut graph = Self::new(width, height)?;

        for x in 0..width {
            for y in 0..height {
                graph.add_node((x, y), 0);
            }
        }

        // Horizontal connections.
        for x in 0..width - 1 {
            for y in 0..height {
                graph.make_edge(graph.id(x, y), graph.id(x + 1, y));
            }
        }

        // Vertical connections.
        for x in 0..width {
            for y in 0..height - 1 {
                graph.make_edge(graph.id(x, y), graph.id(x, y + 1));
            }
        }

        Ok(graph)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn id(&self, x: usize, y: usize) -> NodeId {
        debug_assert!(
            x < self.width && y < self.height,
            "cell coordinates are out of bounds"
        );

        x * self.height + y
    }

    /// Inserts a node at `position` unless one is already there, and returns
    /// its id either way.
    pub fn add_node(&mut self, position: (usize, usize), distance: usize) -> NodeId {
        let id = self.id(position.0, position.1);
        let slot = &mut self.nodes[id];

        if slot.is_none() {
            *slot = Some(Node {
                position,
                distance,
                neighbors: Vec::new(),
            });
            self.node_count += 1;
        }

        id
    }

    pub fn make_edge(&mut self, a: NodeId, b: NodeId) {
        debug_assert!(
            self.has_node(a) && self.has_node(b),
            "both endpoints of an edge must already be in the graph"
        );

        if let Some(node) = self.nodes[a].as_mut() {
            node.neighbors.push(b);
        }
        if let Some(node) = self.nodes[b].as_mut() {
            node.neighbors.push(a);
        }

        self.edges.push((a, b));
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id), Some(Some(_)))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    pub fn node_at(&self, position: (usize, usize)) -> Option<&Node> {
        if position.0 >= self.width || position.1 >= self.height {
            return None;
        }
        self.node(self.id(position.0, position.1))
    }

    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => &node.neighbors,
            None => &[],
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|node| (id, node)))
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
