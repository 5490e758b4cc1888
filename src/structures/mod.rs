mod config;
mod edge;
mod geo;
mod graph;
mod node;
mod path;
mod way;

pub use config::*;
pub use edge::*;
pub use geo::*;
pub use graph::*;
pub use node::*;
pub use path::*;
pub use way::*;
