use crate::algorithm::{check_input, DistanceLabeling};
use crate::data_structures::DistanceTable;
use crate::graph::Graph;
use crate::Result;

/// Naive relaxation sweep, O(V^2) in the worst case
///
/// Every pass walks all labeled vertices and lowers the label of each
/// neighbor to `distance + 1` where that improves it. Passes repeat until one
/// makes no change. Vertices may be visited before their own label is final;
/// later passes fix that up.
#[derive(Debug, Default, Clone, Copy)]
pub struct Relaxation;

impl Relaxation {
    /// Creates a new relaxation labeling instance
    pub fn new() -> Self {
        Relaxation
    }
}

impl<G> DistanceLabeling<G> for Relaxation
where
    G: Graph + ?Sized,
{
    fn name(&self) -> &'static str {
        "Relaxation"
    }

    fn compute_distances(&self, graph: &G, source: usize) -> Result<DistanceTable> {
        check_input(graph, source)?;

        let n = graph.vertex_count();
        let mut distances: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(0);

        let mut passes = 0usize;
        loop {
            passes += 1;
            let mut updated = 0usize;

            for a in 0..n {
                let Some(dist_a) = distances[a] else {
                    continue;
                };

                for &v in graph.neighbors(a) {
                    let should_update = match distances[v] {
                        None => true,
                        Some(current) => dist_a + 1 < current,
                    };

                    if should_update {
                        distances[v] = Some(dist_a + 1);
                        updated += 1;
                    }
                }
            }

            log::trace!("relaxation pass {}: {} labels lowered", passes, updated);
            if updated == 0 {
                break;
            }
        }

        let table = DistanceTable::new(source, distances);
        log::debug!(
            "relaxation from {} converged after {} passes, {}/{} vertices reachable",
            source,
            passes,
            table.reachable_count(),
            n
        );
        Ok(table)
    }
}
