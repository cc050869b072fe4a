//! Station provider: reads rail station records from delimited text and
//! builds a complete graph weighted by great-circle distance in miles.

mod distance;
mod errors;
mod map;
mod station;

pub use distance::{EARTH_RADIUS_MILES, great_circle_miles};
pub use errors::{StationError, StationErrorCode};
pub use map::{StationMap, StationMapBuilder, StationMapConfig};
pub use station::Station;
