//! Great-circle distance between stations.

use crate::Station;

/// Mean Earth radius used for station distances, in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// Returns the great-circle distance between two stations in miles.
///
/// Uses the spherical law of cosines. The cosine term is clamped to `[-1, 1]`
/// so rounding on antipodal points never produces `NaN`. Identical
/// coordinates are exactly zero miles apart.
///
/// # Examples
/// ```
/// use railspan_providers_stations::{Station, great_circle_miles};
///
/// let here = Station::new("Embarcadero", 37.7929, -122.3971);
/// assert_eq!(great_circle_miles(&here, &here), 0.0);
/// ```
#[must_use]
pub fn great_circle_miles(from: &Station, to: &Station) -> f64 {
    // `acos` of a cosine rounded just below 1 would give a few feet.
    if from.latitude() == to.latitude() && from.longitude() == to.longitude() {
        return 0.0;
    }
    let from_lat = from.latitude().to_radians();
    let to_lat = to.latitude().to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let cosine = from_lat.sin() * to_lat.sin() + from_lat.cos() * to_lat.cos() * delta_lon.cos();
    EARTH_RADIUS_MILES * cosine.clamp(-1.0, 1.0).acos()
}
