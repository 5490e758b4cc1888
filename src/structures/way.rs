use crate::structures::{LatLng, OsmId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawNode {
    pub id: OsmId,
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OneWay {
    Forward,
    Reverse,
    #[default]
    TwoWay,
}

impl OneWay {
    pub fn parse(value: &str) -> OneWay {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "1" => OneWay::Forward,
            "-1" => OneWay::Reverse,
            _ => OneWay::TwoWay,
        }
    }
}

/// The subset of way tags the graph builder understands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WayTags {
    pub highway: Option<String>,
    pub name: Option<String>,
    pub oneway: OneWay,
}

impl WayTags {
    pub fn from_pairs<'a, I>(tags: I) -> WayTags
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut parsed = WayTags::default();
        for (key, value) in tags {
            match key {
                "highway" => parsed.highway = Some(value.to_string()),
                "name" if !value.trim().is_empty() => parsed.name = Some(value.to_string()),
                "oneway" => parsed.oneway = OneWay::parse(value),
                _ => {}
            }
        }
        parsed
    }

    pub fn is_street(&self) -> bool {
        self.highway.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawWay {
    pub id: OsmId,
    pub node_ids: Vec<OsmId>,
    pub tags: WayTags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oneway_values() {
        assert_eq!(OneWay::parse("yes"), OneWay::Forward);
        assert_eq!(OneWay::parse("True"), OneWay::Forward);
        assert_eq!(OneWay::parse("1"), OneWay::Forward);
        assert_eq!(OneWay::parse("-1"), OneWay::Reverse);
        assert_eq!(OneWay::parse("no"), OneWay::TwoWay);
        assert_eq!(OneWay::parse("reversible"), OneWay::TwoWay);
    }

    #[test]
    fn tags_keep_only_known_keys() {
        let tags = WayTags::from_pairs([
            ("highway", "residential"),
            ("name", "Rua Jangadeiros Alagoanos"),
            ("oneway", "-1"),
            ("surface", "asphalt"),
        ]);
        assert!(tags.is_street());
        assert_eq!(tags.name.as_deref(), Some("Rua Jangadeiros Alagoanos"));
        assert_eq!(tags.oneway, OneWay::Reverse);
    }

    #[test]
    fn blank_name_counts_as_unnamed() {
        let tags = WayTags::from_pairs([("highway", "service"), ("name", "  ")]);
        assert_eq!(tags.name, None);
        assert_eq!(tags.oneway, OneWay::TwoWay);
    }

    #[test]
    fn missing_highway_is_not_a_street() {
        let tags = WayTags::from_pairs([("building", "yes")]);
        assert!(!tags.is_street());
    }
}
