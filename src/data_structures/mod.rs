pub mod distance_table;
pub mod vertex_set;

pub use distance_table::DistanceTable;
pub use vertex_set::VertexSet;
