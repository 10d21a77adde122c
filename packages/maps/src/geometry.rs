//! Geographic and pixel geometry literals.
//!
//! The Maps API accepts literal objects everywhere class instances are
//! accepted, so the binding always sends literals and receives the
//! `toJSON()` form back. These are the only types in the repo with behavior
//! of their own; everything else delegates across the boundary.

use serde::{Deserialize, Serialize};

use crate::impl_wire_types;

/// A point on the globe, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A latitude/longitude rectangle.
///
/// Spans are treated as plain intervals; bounds crossing the antimeridian
/// are not handled locally (the API computes those itself, see
/// `Circle::bounds`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south: south_west.lat,
            west: south_west.lng,
            north: north_east.lat,
            east: north_east.lng,
        }
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    /// Grow the bounds to include `position`.
    pub fn extend(&mut self, position: LatLng) {
        self.south = self.south.min(position.lat);
        self.north = self.north.max(position.lat);
        self.west = self.west.min(position.lng);
        self.east = self.east.max(position.lng);
    }

    pub fn contains(&self, position: LatLng) -> bool {
        position.lat >= self.south
            && position.lat <= self.north
            && position.lng >= self.west
            && position.lng <= self.east
    }

    /// The smallest bounds containing both.
    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        LatLngBounds {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// A pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A pixel extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl_wire_types!(LatLng, LatLngBounds, Point, Size);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_grows_in_every_direction() {
        let mut bounds = LatLngBounds::new(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0));
        bounds.extend(LatLng::new(-2.0, 3.0));
        assert_eq!(bounds.south, -2.0);
        assert_eq!(bounds.east, 3.0);
        assert_eq!(bounds.north, 1.0);
        assert_eq!(bounds.west, 0.0);
    }

    #[test]
    fn contains_includes_the_edges() {
        let bounds = LatLngBounds::new(LatLng::new(0.0, 0.0), LatLng::new(2.0, 2.0));
        assert!(bounds.contains(LatLng::new(0.0, 2.0)));
        assert!(bounds.contains(LatLng::new(1.0, 1.0)));
        assert!(!bounds.contains(LatLng::new(2.1, 1.0)));
    }

    #[test]
    fn union_covers_both() {
        let a = LatLngBounds::new(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0));
        let b = LatLngBounds::new(LatLng::new(-1.0, 0.5), LatLng::new(0.5, 4.0));
        let joined = a.union(&b);
        assert!(joined.contains(LatLng::new(1.0, 1.0)));
        assert!(joined.contains(LatLng::new(-1.0, 4.0)));
    }

    #[test]
    fn center_is_the_midpoint() {
        let bounds = LatLngBounds::new(LatLng::new(-10.0, 20.0), LatLng::new(10.0, 40.0));
        assert_eq!(bounds.center(), LatLng::new(0.0, 30.0));
    }

    #[test]
    fn literals_use_the_wire_field_names() {
        let json = serde_json::to_value(LatLng::new(48.8, 2.3)).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 48.8, "lng": 2.3 }));

        let bounds = LatLngBounds::new(LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0));
        let json = serde_json::to_value(bounds).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "south": 1.0, "west": 2.0, "north": 3.0, "east": 4.0 })
        );
    }
}
