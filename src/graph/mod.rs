pub mod connection_table;
pub mod generators;
pub mod traits;

pub use connection_table::ConnectionTable;
pub use traits::{Graph, MutableGraph};

use crate::{Error, Result};

/// Checks that every adjacency entry names a vertex inside the graph
pub fn validate<G: Graph + ?Sized>(graph: &G) -> Result<()> {
    let n = graph.vertex_count();
    for v in 0..n {
        if let Some(&bad) = graph.neighbors(v).iter().find(|&&u| u >= n) {
            return Err(Error::InvalidEdge(v, bad));
        }
    }
    Ok(())
}
