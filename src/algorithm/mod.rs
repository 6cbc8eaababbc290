pub mod layered;
pub mod relaxation;
pub mod traits;

pub use traits::DistanceLabeling;

use crate::graph::{self, Graph};
use crate::{Error, Result};

/// Rejects an out-of-range source and adjacency entries pointing outside the graph
pub(crate) fn check_input<G: Graph + ?Sized>(graph: &G, source: usize) -> Result<()> {
    if !graph.has_vertex(source) {
        return Err(Error::SourceNotFound(source));
    }
    graph::validate(graph)
}
