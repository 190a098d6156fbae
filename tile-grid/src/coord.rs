//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! WGS84 coordinates

use crate::error::{Error, Result};

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Validate a latitude in WGS84 system (bounds included)
pub fn validate_latitude(lat: f64) -> Result<f64> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(Error::Range(format!(
            "invalid latitude {} (WGS84 [-90,+90])",
            lat
        )));
    }
    Ok(lat)
}

/// Validate a longitude in WGS84 system (bounds included)
pub fn validate_longitude(lon: f64) -> Result<f64> {
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(Error::Range(format!(
            "invalid longitude {} (WGS84 [-180,+180])",
            lon
        )));
    }
    Ok(lon)
}

/// Validated WGS84 position
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Result<Point> {
        Ok(Point {
            lat: validate_latitude(lat)?,
            lon: validate_longitude(lon)?,
        })
    }
}

/// Axis-aligned rectangle in lat/lon space
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Bounding box spanned by two corners given in any order.
    ///
    /// Latitudes and longitudes are sorted independently, then validated.
    pub fn new(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<BoundingBox> {
        let (min_lat, max_lat) = if lat1 <= lat2 {
            (lat1, lat2)
        } else {
            (lat2, lat1)
        };
        let (min_lon, max_lon) = if lon1 <= lon2 {
            (lon1, lon2)
        } else {
            (lon2, lon1)
        };
        Ok(BoundingBox {
            min_lat: validate_latitude(min_lat)?,
            min_lon: validate_longitude(min_lon)?,
            max_lat: validate_latitude(max_lat)?,
            max_lon: validate_longitude(max_lon)?,
        })
    }

    /// South-west corner
    pub fn min_corner(&self) -> Point {
        Point {
            lat: self.min_lat,
            lon: self.min_lon,
        }
    }

    /// North-east corner
    pub fn max_corner(&self) -> Point {
        Point {
            lat: self.max_lat,
            lon: self.max_lon,
        }
    }
}
