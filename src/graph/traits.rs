use std::fmt::Debug;

/// Trait representing an undirected, unweighted graph stored as ordered
/// adjacency lists
///
/// Neighbor order is significant: path reconstruction and enumeration scan
/// neighbors in exactly the order returned by [`Graph::neighbors`].
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the ordered neighbor list of a vertex
    ///
    /// Vertices outside the graph have no neighbors.
    fn neighbors(&self, vertex: usize) -> &[usize];

    /// Returns the number of adjacency entries divided by two, so a bond
    /// recorded in both endpoint lists counts once
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.neighbors(v).len())
            .sum::<usize>()
            / 2
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).contains(&to)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds an undirected edge, appending each endpoint to the other's list
    ///
    /// Returns false for out-of-range endpoints and self-loops.
    fn add_edge(&mut self, from: usize, to: usize) -> bool;

    /// Removes every edge between the two vertices
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}

impl Graph for [Vec<usize>] {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        self.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Graph for Vec<Vec<usize>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        self.as_slice().neighbors(vertex)
    }
}
