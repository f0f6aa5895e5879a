//! Geographic primitives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 coordinate pair. Both components are always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate, returning `None` unless both components are finite.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        (lat.is_finite() && lon.is_finite()).then_some(Self { lat, lon })
    }

    /// Parse a coordinate from its textual components.
    ///
    /// Surrounding whitespace is ignored. Empty or non-numeric components,
    /// and values that are not finite, yield `None`.
    ///
    /// ```
    /// use spotmap_core::Coordinate;
    ///
    /// let c = Coordinate::parse("37.7", " -122.4 ").unwrap();
    /// assert_eq!((c.lat, c.lon), (37.7, -122.4));
    /// assert!(Coordinate::parse("", "-122.4").is_none());
    /// assert!(Coordinate::parse("north", "-122.4").is_none());
    /// ```
    pub fn parse(lat: &str, lon: &str) -> Option<Self> {
        Self::new(parse_component(lat)?, parse_component(lon)?)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}

fn parse_component(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A rectangular area enclosing a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    /// Bounds of a single point.
    pub fn of(point: Coordinate) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Smallest bounds containing every point, or `None` for no points.
    pub fn enclosing(points: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::of(first), |mut bounds, p| {
            bounds.extend(p);
            bounds
        }))
    }

    /// Grow the bounds to include `point`.
    pub fn extend(&mut self, point: Coordinate) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lon = self.south_west.lon.min(point.lon);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lon = self.north_east.lon.max(point.lon);
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lon..=self.north_east.lon).contains(&point.lon)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lon: (self.south_west.lon + self.north_east.lon) / 2.0,
        }
    }
}

/// Screen-space padding, in pixels, applied when fitting bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub x: u32,
    pub y: u32,
}

impl Padding {
    pub const fn uniform(px: u32) -> Self {
        Self { x: px, y: px }
    }
}
