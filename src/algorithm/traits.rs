use crate::data_structures::DistanceTable;
use crate::graph::Graph;
use crate::Result;

/// Trait for strategies that label every vertex with its distance from a source
///
/// Implementations must agree on the resulting table: path reconstruction and
/// enumeration only read distances, so any two conforming strategies produce
/// identical query output.
pub trait DistanceLabeling<G>
where
    G: Graph + ?Sized,
{
    /// Compute the distance in edges from `source` to every vertex
    fn compute_distances(&self, graph: &G, source: usize) -> Result<DistanceTable>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
