use serde::{Deserialize, Serialize};
use tripline::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub coordinate: Coordinate,
}

impl StopDto {
    pub fn from(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.to_string(),
            coordinate: stop.coordinate,
        }
    }

    pub fn into_stop(self) -> Stop {
        Stop::new(self.id, self.name, self.coordinate)
    }
}
