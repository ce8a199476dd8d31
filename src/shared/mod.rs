pub mod geo;
mod stop;
pub mod time;

pub use geo::*;
pub use stop::*;
pub use time::*;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Anything a route can pass through. Implemented by [`Stop`] and open for
/// callers that keep their own place type.
pub trait Waypoint: Identifiable {
    fn coordinate(&self) -> Coordinate;
}
