use crate::data_structures::VertexSet;
use crate::graph::Graph;
use crate::index::ShortestPathIndex;
use crate::{Error, Result};

impl<'g, G> ShortestPathIndex<'g, G>
where
    G: Graph + ?Sized,
{
    /// Every vertex on some shortest path from the source to any frontier vertex
    ///
    /// Walks the distance gradient backwards one layer at a time, keeping all
    /// predecessors rather than one. The frontier itself is part of the result;
    /// an empty frontier yields an empty set.
    pub fn path_union<I>(&self, frontier: I) -> Result<VertexSet>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut result = VertexSet::with_capacity(self.graph.vertex_count());
        let mut layer = Vec::new();

        for v in frontier {
            self.distance_to(v)?;
            if result.insert(v) {
                layer.push(v);
            }
        }

        let mut rounds = 0usize;
        while !layer.is_empty() {
            rounds += 1;
            let mut previous = Vec::new();

            for &v in &layer {
                let d = match self.distances.get(v) {
                    Some(0) => continue,
                    Some(d) => d,
                    None => {
                        return Err(Error::AlgorithmError(format!(
                            "unlabeled vertex {} reached during path union",
                            v
                        )))
                    }
                };

                for &n in self.graph.neighbors(v) {
                    if self.distances.get(n) == Some(d - 1) && result.insert(n) {
                        previous.push(n);
                    }
                }
            }

            layer = previous;
        }

        log::trace!(
            "path union from {}: {} vertices after {} layers",
            self.source(),
            result.len(),
            rounds
        );
        Ok(result)
    }

    /// [`Self::path_union`] for a single frontier vertex
    pub fn path_union_from(&self, vertex: usize) -> Result<VertexSet> {
        self.path_union(std::iter::once(vertex))
    }
}
