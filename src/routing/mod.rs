mod dijkstra;
#[allow(clippy::module_inception)]
mod routing;

pub use routing::*;
