use std::collections::VecDeque;

use crate::algorithm::{check_input, DistanceLabeling};
use crate::data_structures::DistanceTable;
use crate::graph::Graph;
use crate::Result;

/// Layered breadth-first labeling, O(V + E)
///
/// Each vertex is labeled once, at its minimum distance, so the table is
/// identical to the one [`Relaxation`](crate::algorithm::relaxation::Relaxation)
/// converges to.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayeredBfs;

impl LayeredBfs {
    pub fn new() -> Self {
        LayeredBfs
    }
}

impl<G> DistanceLabeling<G> for LayeredBfs
where
    G: Graph + ?Sized,
{
    fn name(&self) -> &'static str {
        "LayeredBfs"
    }

    fn compute_distances(&self, graph: &G, source: usize) -> Result<DistanceTable> {
        check_input(graph, source)?;

        let mut distances: Vec<Option<usize>> = vec![None; graph.vertex_count()];
        let mut queue = VecDeque::new();

        distances[source] = Some(0);
        queue.push_back((source, 0));

        while let Some((current, depth)) = queue.pop_front() {
            for &v in graph.neighbors(current) {
                if distances[v].is_none() {
                    distances[v] = Some(depth + 1);
                    queue.push_back((v, depth + 1));
                }
            }
        }

        let table = DistanceTable::new(source, distances);
        log::debug!(
            "breadth-first labeling from {}: {}/{} vertices reachable",
            source,
            table.reachable_count(),
            table.len()
        );
        Ok(table)
    }
}
