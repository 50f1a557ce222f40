//! Module with GPS specific structures and route measurements
use geo::{Distance, Haversine, Point};
use std::char;

/// Stores a single geospatial point
///
/// No range checks are applied, values outside of the valid latitude and longitude ranges
/// (or NaN) are carried through storage and distance calculations unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// latitude coordinate in degrees
    latitude: f64,
    /// longitude coordinate in degrees
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Return latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Return longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance in meters to another coordinate
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let origin = Point::new(self.longitude, self.latitude);
        let destination = Point::new(other.longitude, other.latitude);
        Haversine::distance(origin, destination)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

/// An ordered, read-only GPS trace in the order the samples were recorded
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    coordinates: Vec<Coordinate>,
}

impl Route {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Route { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Return the point used to anchor the distance annotation on a map
    ///
    /// For an even number of points the lower of the two middle points is used.
    pub fn midpoint(&self) -> Option<Coordinate> {
        let count = self.coordinates.len();
        if count == 0 {
            return None;
        }
        let index = (if count > 1 { count - 1 } else { count }) / 2;
        self.coordinates.get(index).copied()
    }

    /// Total length of the route in meters
    pub fn total_distance(&self) -> f64 {
        total_distance(&self.coordinates)
    }
}

/// Sum the great-circle distance between each consecutive pair of coordinates
///
/// Pairs are summed left to right, fewer than two points yields 0.
pub fn total_distance(coordinates: &[Coordinate]) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .fold(0.0, |total, d| total + d)
}

/// Round a distance to whole meters, non-finite values are reported as 0
pub fn rounded_meters(distance: f64) -> i64 {
    if distance.is_finite() {
        distance.round() as i64
    } else {
        0
    }
}

/// Label used for the distance annotation of a route
pub fn distance_label(distance: f64) -> String {
    format!("{} m", rounded_meters(distance))
}

/// Encodes a slice of coordinates into Google Encoded Polyline format.
///
/// This code was extracted and simplified for our use case from:
/// https://github.com/georust/polyline
/// https://developers.google.com/maps/documentation/utilities/polylinealgorithm
pub fn encode_coordinates(coordinates: &[Coordinate]) -> Result<String, String> {
    let mut output = String::new();
    let mut b = (0, 0);

    for a in coordinates {
        let a = (scale(a.latitude), scale(a.longitude));
        output.push_str(&encode(a.0, b.0)?);
        output.push_str(&encode(a.1, b.1)?);
        b = a;
    }

    Ok(output)
}

/// Scale a floating point value into an integer at the given precision
#[inline]
fn scale(n: f64) -> i64 {
    static FACTOR: f64 = 100_000.0; // use 5 digits of precision
    (FACTOR * n).round() as i64
}

/// Encode a single latitude or longitude value into the polyline format
fn encode(current: i64, previous: i64) -> Result<String, String> {
    let delta = current.saturating_sub(previous);
    let mut coordinate = delta.wrapping_shl(1);
    if delta < 0 {
        coordinate = !coordinate;
    }
    let mut output = String::new();
    while coordinate >= 0x20 {
        let from_char = char::from_u32(((0x20 | (coordinate & 0x1f)) + 63) as u32)
            .ok_or("Couldn't convert character")?;
        output.push(from_char);
        coordinate >>= 5;
    }
    let from_char = char::from_u32((coordinate + 63) as u32).ok_or("Couldn't convert character")?;
    output.push(from_char);
    Ok(output)
}
