use crate::geo::Coordinate;
use glam::DVec2;
use std::f64::consts::PI;

/// Earth radius used by spherical Mercator, in meters
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude limit beyond which Mercator y diverges
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Point in projected plane units (meters, y growing northward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanePoint(pub DVec2);

impl PlanePoint {
    #[inline(always)]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline(always)]
    pub fn y(self) -> f64 {
        self.0.y
    }
}

/// Mercator x for a longitude in degrees
#[inline(always)]
pub fn lon_to_x(lon: f64) -> f64 {
    EARTH_RADIUS * lon * PI / 180.0
}

/// Mercator y for a latitude in degrees
#[inline(always)]
pub fn lat_to_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    EARTH_RADIUS * (PI / 4.0 + lat * PI / 360.0).tan().ln()
}

/// Project a geographic coordinate onto the Mercator plane
#[inline(always)]
pub fn project(coord: Coordinate) -> PlanePoint {
    PlanePoint(DVec2::new(lon_to_x(coord.lon), lat_to_y(coord.lat)))
}
