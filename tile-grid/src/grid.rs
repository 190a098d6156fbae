//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Slippy map tile grid (spherical Web Mercator, XYZ addressing)

use crate::coord::{BoundingBox, Point};
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Highest zoom level served by tile.openstreetmap.org
pub const MAX_ZOOM: u8 = 19;

/// Tile width and height in pixels
pub const TILE_SIZE: u32 = 256;

/// Latitude of the north edge of tile 0/0/0
pub const MERCATOR_MAX_LAT: f64 = 85.0511287798066;

/// Default tile server
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org";

// Tolerance in tile units applied before flooring a fractional row number
const EPSILON: f64 = 0.0000001;

/// Geographic extent of a tile in degrees (x = longitude, y = latitude)
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

/// Min and max tile numbers, bounds included
#[derive(PartialEq, Clone, Debug)]
pub struct ExtentInt {
    pub minx: u32,
    pub miny: u32,
    pub maxx: u32,
    pub maxy: u32,
}

impl ExtentInt {
    /// Number of tile columns
    pub fn width(&self) -> u32 {
        self.maxx - self.minx + 1
    }
    /// Number of tile rows
    pub fn height(&self) -> u32 {
        self.maxy - self.miny + 1
    }
    /// Number of tiles
    pub fn len(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// Check zoom level is in 0..=MAX_ZOOM
pub fn validate_zoom(zoom: u8) -> Result<u8> {
    if zoom > MAX_ZOOM {
        return Err(Error::Config(format!(
            "invalid zoom value {} (0..{})",
            zoom, MAX_ZOOM
        )));
    }
    Ok(zoom)
}

/// Number of tiles per axis (2^zoom), `zoom` must be valid
pub(crate) fn level_size(zoom: u8) -> u32 {
    1 << zoom
}

/// Highest tile number of a zoom level (2^zoom - 1), `zoom` must be valid
pub(crate) fn max_tile_number(zoom: u8) -> u32 {
    level_size(zoom) - 1
}

fn clamp_index(value: f64, zoom: u8) -> u32 {
    let max = max_tile_number(zoom) as f64;
    value.floor().max(0.0).min(max) as u32
}

/// Tile number `(x, y)` containing a position.
///
/// Latitudes beyond the Web Mercator limit (poles included) fall into the first or
/// last row, longitude 180 falls into the last column.
///
/// The row is floored after adding 1e-7 tile units, so that the north edge of a
/// tile computed by [`tile_to_point`] maps back to that tile. A point less than
/// 1e-7 tile units north of a row boundary therefore lands in the row below.
/// Columns are linear in longitude and floored exactly.
pub fn point_to_tile(lat: f64, lon: f64, zoom: u8) -> Result<(u32, u32)> {
    let zoom = validate_zoom(zoom)?;
    let n = (zoom as f64).exp2();
    let lat_rad = lat.max(-MERCATOR_MAX_LAT).min(MERCATOR_MAX_LAT).to_radians();
    let x = (lon + 180.0) / 360.0 * n;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n;
    Ok((clamp_index(x, zoom), clamp_index(y + EPSILON, zoom)))
}

/// Position `(lat, lon)` of the north-west corner of a tile.
///
/// `x` and `y` may equal 2^zoom, which gives the south-east corner of the last tile.
pub fn tile_to_point(x: u32, y: u32, zoom: u8) -> (f64, f64) {
    let n = (zoom as f64).exp2();
    let m = PI - 2.0 * PI * y as f64 / n;
    let lat = m.sinh().atan().to_degrees();
    let lon = x as f64 / n * 360.0 - 180.0;
    (lat, lon)
}

/// Tile number limits covering a bounding box.
///
/// Y grows southward, so `miny` comes from the north edge (`max_lat`).
pub fn tile_limits(bbox: &BoundingBox, zoom: u8) -> Result<ExtentInt> {
    let (minx, miny) = point_to_tile(bbox.max_lat, bbox.min_lon, zoom)?;
    let (maxx, maxy) = point_to_tile(bbox.min_lat, bbox.max_lon, zoom)?;
    Ok(ExtentInt {
        minx,
        miny,
        maxx,
        maxy,
    })
}

/// Slippy map tile with the position of its north-west corner
#[derive(PartialEq, Clone, Debug)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
    /// Latitude of the north-west corner
    pub lat: f64,
    /// Longitude of the north-west corner
    pub lon: f64,
}

impl Tile {
    /// Tile containing a position
    pub fn from_lat_lon(lat: f64, lon: f64, zoom: u8) -> Result<Tile> {
        let (x, y) = point_to_tile(lat, lon, zoom)?;
        Ok(Tile::from_grid(x, y, zoom))
    }

    pub fn from_point(point: &Point, zoom: u8) -> Result<Tile> {
        Tile::from_lat_lon(point.lat, point.lon, zoom)
    }

    /// Tile of a valid zoom level, `x` and `y` in `0..=2^zoom-1`
    pub fn from_xy(x: u32, y: u32, zoom: u8) -> Result<Tile> {
        let zoom = validate_zoom(zoom)?;
        let max = max_tile_number(zoom);
        if x > max || y > max {
            return Err(Error::Range(format!(
                "tile number {},{} incompatible with zoom level {} (0..{})",
                x, y, zoom, max
            )));
        }
        Ok(Tile::from_grid(x, y, zoom))
    }

    // Caller guarantees a valid zoom and tile number
    pub(crate) fn from_grid(x: u32, y: u32, zoom: u8) -> Tile {
        let (lat, lon) = tile_to_point(x, y, zoom);
        Tile {
            x,
            y,
            zoom,
            lat,
            lon,
        }
    }

    /// North-west corner
    pub fn nw_corner(&self) -> Point {
        Point {
            lat: self.lat,
            lon: self.lon,
        }
    }

    /// `(nw_lon, nw_lat, se_lon, se_lat)`.
    ///
    /// The south-east corner is the north-west corner of tile `(x+1, y+1)`.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let (se_lat, se_lon) = tile_to_point(self.x + 1, self.y + 1, self.zoom);
        (self.lon, self.lat, se_lon, se_lat)
    }

    /// Extent in degrees
    pub fn extent(&self) -> Extent {
        let (nw_lon, nw_lat, se_lon, se_lat) = self.bounding_box();
        Extent {
            minx: nw_lon,
            miny: se_lat,
            maxx: se_lon,
            maxy: nw_lat,
        }
    }

    /// `z/x/y` path of the tile
    pub fn path(&self) -> String {
        format!("{}/{}/{}", self.zoom, self.x, self.y)
    }

    /// URL of the tile image on a tile server
    pub fn view_url(&self, base_url: &str) -> String {
        format!("{}/{}.png", base_url, self.path())
    }

    /// URL of the render status page of the tile
    pub fn status_url(&self, base_url: &str) -> String {
        format!("{}/status", self.view_url(base_url))
    }
}
