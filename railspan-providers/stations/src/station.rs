use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A rail station: a name plus coordinates in decimal degrees.
///
/// Two stations are the same graph node when their names match; the
/// coordinates are payload.
#[derive(Clone, Debug)]
pub struct Station {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Station {
    /// Creates a station.
    ///
    /// # Examples
    /// ```
    /// use railspan_providers_stations::Station;
    ///
    /// let a = Station::new("Ashby", 37.853, -122.270);
    /// let b = Station::new("Ashby", 0.0, 0.0);
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Station name, the node identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
