use serde::Deserialize;

use crate::shared::{Coordinate, Stop};

/// Row of a stops table: `id,name,latitude,longitude`.
#[derive(Debug, Deserialize)]
pub struct CsvStop {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CsvStop> for Stop {
    fn from(value: CsvStop) -> Self {
        Stop::new(
            value.id,
            value.name,
            Coordinate {
                latitude: value.latitude,
                longitude: value.longitude,
            },
        )
    }
}
