mod route;
mod schedule;
mod stop;

pub use route::*;
pub use schedule::*;
pub use stop::*;
