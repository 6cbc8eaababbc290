use serde::Serialize;
use std::fmt;

/// Shortest path distances in edges from a fixed source vertex
///
/// One entry per vertex: `Some(d)` for reachable vertices, `None` for vertices
/// in other fragments. The table is produced once by a
/// [`DistanceLabeling`](crate::algorithm::DistanceLabeling) and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTable {
    /// Source vertex ID
    source: usize,

    /// Distances from source to each vertex
    distances: Vec<Option<usize>>,
}

impl DistanceTable {
    /// Wraps labeled distances; `distances[source]` must be `Some(0)`
    pub(crate) fn new(source: usize, distances: Vec<Option<usize>>) -> Self {
        debug_assert_eq!(distances.get(source), Some(&Some(0)));
        DistanceTable { source, distances }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance to a vertex, `None` when unreachable or out of range
    #[inline]
    pub fn get(&self, vertex: usize) -> Option<usize> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Number of vertices covered by the table
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Largest finite distance, i.e. the eccentricity of the source
    pub fn max_distance(&self) -> usize {
        self.distances.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.distances.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.distances
    }
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source: {}, distances: [", self.source)?;
        for (i, d) in self.distances.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match d {
                Some(d) => write!(f, "{}", d)?,
                None => f.write_str("-")?,
            }
        }
        f.write_str("]")
    }
}
