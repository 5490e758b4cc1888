//! Street graphs built from OpenStreetMap ways, and shortest paths over them.

pub mod error;
pub mod ingestion;
pub mod routing;
pub mod services;
pub mod structures;

pub use error::{Error, Result};
