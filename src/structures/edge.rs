use serde::{Deserialize, Serialize};

use crate::structures::NodeID;

pub const UNNAMED_STREET: &str = "unnamed";

/// A directed street segment between two intersections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub origin: NodeID,
    pub destination: NodeID,
    /// Meters along the way geometry, never the chord.
    pub length: f64,
    pub street: Option<String>,
}

impl EdgeData {
    pub fn street_name(&self) -> &str {
        self.street.as_deref().unwrap_or(UNNAMED_STREET)
    }
}
