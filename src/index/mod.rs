//! Shortest path queries from a fixed source vertex.
//!
//! [`ShortestPathIndex`] borrows a graph, labels distances once at
//! construction and answers every query from that immutable table. Queries
//! allocate their own buffers, so a shared index can serve any number of
//! threads at once.

pub mod enumeration;
pub mod union;

pub use enumeration::ShortestPaths;

use std::fmt;

use crate::algorithm::{relaxation::Relaxation, DistanceLabeling};
use crate::data_structures::DistanceTable;
use crate::graph::{ConnectionTable, Graph};
use crate::{Error, Result};

/// Distances from one source vertex plus path queries over them
#[derive(Debug)]
pub struct ShortestPathIndex<'g, G: ?Sized = ConnectionTable> {
    graph: &'g G,
    distances: DistanceTable,
}

impl<'g, G> ShortestPathIndex<'g, G>
where
    G: Graph + ?Sized,
{
    /// Labels distances from `source` with the default [`Relaxation`] sweep
    pub fn new(graph: &'g G, source: usize) -> Result<Self> {
        Self::with_algorithm(graph, source, &Relaxation::new())
    }

    /// Labels distances from `source` with the given strategy
    pub fn with_algorithm<A>(graph: &'g G, source: usize, algorithm: &A) -> Result<Self>
    where
        A: DistanceLabeling<G> + ?Sized,
    {
        let distances = algorithm.compute_distances(graph, source)?;
        if distances.len() != graph.vertex_count() || distances.get(source) != Some(0) {
            return Err(Error::AlgorithmError(format!(
                "{} produced a malformed distance table",
                algorithm.name()
            )));
        }
        Ok(ShortestPathIndex { graph, distances })
    }

    pub fn source(&self) -> usize {
        self.distances.source()
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Returns true when `target` lies in the source's fragment
    pub fn path_exists(&self, target: usize) -> bool {
        self.distances.get(target).is_some()
    }

    /// Length in edges of a shortest path to `target`
    pub fn distance_to(&self, target: usize) -> Result<usize> {
        self.check_vertex(target)?;
        self.distances.get(target).ok_or(Error::NoPath {
            from: self.source(),
            to: target,
        })
    }

    /// One shortest path from the source to `target`, both ends included
    ///
    /// Built backwards from `target`: each position takes the first neighbor,
    /// in adjacency order, of the vertex after it that is one step closer to
    /// the source. The result is the first path [`Self::shortest_paths_to`]
    /// yields.
    pub fn shortest_path_to(&self, target: usize) -> Result<Vec<usize>> {
        let length = self.distance_to(target)?;

        let mut path = vec![self.source(); length + 1];
        path[length] = target;
        if length > 0 {
            let mut cursors = vec![0; length];
            self.complete_path(&mut path, &mut cursors, length - 1)?;
        }
        Ok(path)
    }

    /// Lazily enumerates every distinct shortest path to `target`
    pub fn shortest_paths_to(&self, target: usize) -> Result<ShortestPaths<'_, G>> {
        ShortestPaths::new(self, target)
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.graph.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }

    /// Looks for a predecessor of `vertex` at distance `distance`, scanning its
    /// neighbor list from `start`
    ///
    /// Repeated entries (parallel bonds) only count at their first position,
    /// so resuming a scan never proposes the same predecessor twice.
    pub(crate) fn next_predecessor(
        &self,
        vertex: usize,
        distance: usize,
        start: usize,
    ) -> Option<(usize, usize)> {
        let neighbors = self.graph.neighbors(vertex);
        neighbors
            .iter()
            .enumerate()
            .skip(start)
            .find(|&(i, &n)| {
                self.distances.get(n) == Some(distance) && !neighbors[..i].contains(&n)
            })
            .map(|(i, &n)| (i, n))
    }

    /// Fills positions `top` down to 0 with first-match predecessors
    ///
    /// `path[top + 1]` must already hold a vertex at distance `top + 1`. Each
    /// filled position records the neighbor index it came from in `cursors`.
    pub(crate) fn complete_path(
        &self,
        path: &mut [usize],
        cursors: &mut [usize],
        top: usize,
    ) -> Result<()> {
        for i in (0..=top).rev() {
            let next = path[i + 1];
            let (cursor, vertex) = self.next_predecessor(next, i, 0).ok_or_else(|| {
                Error::AlgorithmError(format!(
                    "vertex {} at distance {} has no predecessor",
                    next,
                    i + 1
                ))
            })?;
            path[i] = vertex;
            cursors[i] = cursor;
        }
        Ok(())
    }
}

impl<G: ?Sized> Clone for ShortestPathIndex<'_, G> {
    fn clone(&self) -> Self {
        ShortestPathIndex {
            graph: self.graph,
            distances: self.distances.clone(),
        }
    }
}

impl<G: ?Sized> fmt::Display for ShortestPathIndex<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.distances)
    }
}
