use std::sync::Arc;

use crate::shared::{Identifiable, Waypoint, geo::Coordinate};

/// A point of interest picked for a trip.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stop {
    /// Opaque identifier, unique within a single computation.
    pub id: Arc<str>,
    /// Human-readable label (e.g. "Gyeongbokgung Palace"). Only used for step text.
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

impl Stop {
    pub fn new(id: impl Into<Arc<str>>, name: impl Into<Arc<str>>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
        }
    }
}

impl Identifiable for Stop {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Waypoint for Stop {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
