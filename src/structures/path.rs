use serde::{Deserialize, Serialize};

use crate::structures::OsmId;

/// One traversed edge of a [`Path`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathLeg {
    pub from: OsmId,
    pub to: OsmId,
    pub length: f64,
    pub street: Option<String>,
}

/// A shortest path, expressed in external ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<OsmId>,
    pub legs: Vec<PathLeg>,
    pub distance: f64,
}

impl Path {
    pub fn start(&self) -> Option<OsmId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<OsmId> {
        self.nodes.last().copied()
    }

    /// Distance recomputed from the legs.
    pub fn legs_length(&self) -> f64 {
        self.legs.iter().map(|l| l.length).sum()
    }

    /// Street names in travel order, consecutive repeats collapsed.
    pub fn streets(&self) -> Vec<Option<&str>> {
        let mut streets: Vec<Option<&str>> = Vec::new();
        for leg in &self.legs {
            let street = leg.street.as_deref();
            if streets.last() != Some(&street) {
                streets.push(street);
            }
        }
        streets
    }
}
