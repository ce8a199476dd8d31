pub mod estimator;
pub mod schedule;
pub mod shared;
pub mod source;

pub mod prelude {
    pub use crate::estimator::{
        RouteEstimator, RouteSegment, RouteSummary, Rounding, SpeedTable, TravelMode,
    };
    pub use crate::schedule::{DayPlan, DayPlanner, TripPlan, Visit};
    pub use crate::shared::{Coordinate, Distance, Duration, Identifiable, Stop, Time, Waypoint};
    pub use crate::source::StopSource;
}
