mod graph_builder;
mod pbf;

pub use graph_builder::*;
pub use pbf::*;
