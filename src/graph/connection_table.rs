use serde::{Deserialize, Serialize};

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A molecule's atom connectivity table
///
/// Each bond is recorded in both endpoint lists, in the order bonds were
/// added. Parallel bonds are kept as repeated entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConnectionTable")]
pub struct ConnectionTable {
    /// Neighbor list for each atom: atom_id -> [neighbor_atom]
    neighbors: Vec<Vec<usize>>,
}

/// Unchecked wire form, validated on the way into [`ConnectionTable`]
#[derive(Deserialize)]
struct RawConnectionTable {
    neighbors: Vec<Vec<usize>>,
}

impl TryFrom<RawConnectionTable> for ConnectionTable {
    type Error = Error;

    fn try_from(raw: RawConnectionTable) -> Result<Self> {
        ConnectionTable::from_adjacency(raw.neighbors)
    }
}

impl ConnectionTable {
    /// Creates a new empty connection table
    pub fn new() -> Self {
        ConnectionTable {
            neighbors: Vec::new(),
        }
    }

    /// Creates a new connection table with the specified number of atoms and no bonds
    pub fn with_capacity(atoms: usize) -> Self {
        ConnectionTable {
            neighbors: vec![Vec::new(); atoms],
        }
    }

    /// Builds a table from a bond list, adding bonds in the given order
    pub fn from_bonds(atoms: usize, bonds: &[(usize, usize)]) -> Result<Self> {
        let mut table = ConnectionTable::with_capacity(atoms);
        for &(a, b) in bonds {
            if !table.add_edge(a, b) {
                return Err(Error::InvalidEdge(a, b));
            }
        }
        Ok(table)
    }

    /// Wraps ready-made adjacency lists after checking every entry is in range
    pub fn from_adjacency(neighbors: Vec<Vec<usize>>) -> Result<Self> {
        crate::graph::validate(neighbors.as_slice())?;
        Ok(ConnectionTable { neighbors })
    }

    /// Returns the raw adjacency lists
    pub fn as_adjacency(&self) -> &[Vec<usize>] {
        &self.neighbors
    }
}

impl Graph for ConnectionTable {
    fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        self.neighbors.neighbors(vertex)
    }
}

impl MutableGraph for ConnectionTable {
    fn add_vertex(&mut self) -> usize {
        self.neighbors.push(Vec::new());
        self.neighbors.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || from == to {
            return false;
        }

        self.neighbors[from].push(to);
        self.neighbors[to].push(from);
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        let len_before = self.neighbors[from].len();
        self.neighbors[from].retain(|&n| n != to);
        self.neighbors[to].retain(|&n| n != from);

        len_before > self.neighbors[from].len()
    }
}

impl From<ConnectionTable> for Vec<Vec<usize>> {
    fn from(table: ConnectionTable) -> Self {
        table.neighbors
    }
}
