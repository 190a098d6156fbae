//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Command line argument classification

use crate::coord::{BoundingBox, Point};
use crate::error::{Error, Result};
use crate::grid::{max_tile_number, validate_zoom, Tile};
use regex::Regex;

// A field may be preceded by blanks, the comma must directly follow the number.
lazy_static! {
    static ref POINT_RE: Regex =
        Regex::new(r"^\s*([-+]?[0-9]+(?:\.[0-9]+)?),\s*([-+]?[0-9]+(?:\.[0-9]+)?)$").unwrap();
    static ref BBOX_RE: Regex = Regex::new(
        r"^\s*([-+]?[0-9]+(?:\.[0-9]+)?),\s*([-+]?[0-9]+(?:\.[0-9]+)?),\s*([-+]?[0-9]+(?:\.[0-9]+)?),\s*([-+]?[0-9]+(?:\.[0-9]+)?)$"
    )
    .unwrap();
    static ref TILE_RE: Regex = Regex::new(r"^\s*([-+]?[0-9]+),\s*([-+]?[0-9]+)$").unwrap();
}

/// How positional arguments are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `lat,lon` or `lat1,lon1,lat2,lon2`
    LatLon,
    /// `lon,lat` or `lon1,lat1,lon2,lat2`
    LonLat,
    /// Tile number `x,y`
    XY,
}

impl InputMode {
    /// Mode selected by mutually exclusive flags
    pub fn from_flags(lat_lon: bool, lon_lat: bool, xy: bool) -> Result<InputMode> {
        match (lat_lon, lon_lat, xy) {
            (true, false, false) => Ok(InputMode::LatLon),
            (false, true, false) => Ok(InputMode::LonLat),
            (false, false, true) => Ok(InputMode::XY),
            (false, false, false) => Err(Error::Config(
                "indicate an option --lat-lon, --lon-lat, --x-y".to_string(),
            )),
            _ => Err(Error::Config(
                "indicate only one option --lat-lon, --lon-lat, --x-y".to_string(),
            )),
        }
    }

    /// Arguments are points or bounding boxes
    pub fn is_coordinate(&self) -> bool {
        *self != InputMode::XY
    }

    fn expected(&self) -> &'static str {
        match self {
            InputMode::LatLon => "lat,lon or lat1,lon1,lat2,lon2",
            InputMode::LonLat => "lon,lat or lon1,lat1,lon2,lat2",
            InputMode::XY => "x,y",
        }
    }

    /// Reorder two fields as `(lat, lon)`
    fn lat_lon(&self, first: f64, second: f64) -> Result<(f64, f64)> {
        match self {
            InputMode::LatLon => Ok((first, second)),
            InputMode::LonLat => Ok((second, first)),
            InputMode::XY => Err(Error::Config(
                "tile numbers are not coordinates, use --lat-lon or --lon-lat".to_string(),
            )),
        }
    }
}

/// Classified positional argument
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Point(Point),
    BoundingBox(BoundingBox),
    Tile(Tile),
}

fn float_fields(re: &Regex, text: &str, expected: &'static str) -> Result<Vec<f64>> {
    let caps = re
        .captures(text)
        .ok_or_else(|| Error::parse(text, expected))?;
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()
        .map_err(|_| Error::parse(text, expected))
}

/// Parse `a,b` as a position, field order given by `mode`
pub fn parse_point(text: &str, mode: InputMode) -> Result<Point> {
    let fields = float_fields(&POINT_RE, text, "two comma separated numbers")?;
    let (lat, lon) = mode.lat_lon(fields[0], fields[1])?;
    Point::new(lat, lon)
}

/// Parse `a1,b1,a2,b2` as a bounding box, field order given by `mode`.
///
/// Corners may be given in any order.
pub fn parse_bounding_box(text: &str, mode: InputMode) -> Result<BoundingBox> {
    let fields = float_fields(&BBOX_RE, text, "four comma separated numbers")?;
    let (lat1, lon1) = mode.lat_lon(fields[0], fields[1])?;
    let (lat2, lon2) = mode.lat_lon(fields[2], fields[3])?;
    BoundingBox::new(lat1, lon1, lat2, lon2)
}

/// Parse `x,y` as a tile number valid for `zoom`
pub fn parse_tile_index(text: &str, zoom: u8) -> Result<(u32, u32)> {
    const EXPECTED: &str = "two comma separated integers";
    let zoom = validate_zoom(zoom)?;
    let caps = TILE_RE
        .captures(text)
        .ok_or_else(|| Error::parse(text, EXPECTED))?;
    let number = |i: usize| {
        caps[i]
            .parse::<i64>()
            .map_err(|_| Error::parse(text, EXPECTED))
    };
    let (x, y) = (number(1)?, number(2)?);
    let max = max_tile_number(zoom) as i64;
    let in_range = |v: i64| 0 <= v && v <= max;
    if !in_range(x) || !in_range(y) {
        return Err(Error::Range(format!(
            "tile number {},{} incompatible with zoom level {} (0..{})",
            x, y, zoom, max
        )));
    }
    Ok((x as u32, y as u32))
}

/// Classify an argument according to the input mode.
///
/// In coordinate modes a bounding box is tried first, then a point.
/// `zoom` is checked in every mode.
pub fn classify(text: &str, mode: InputMode, zoom: u8) -> Result<Argument> {
    let zoom = validate_zoom(zoom)?;
    let classified = if mode.is_coordinate() {
        match parse_bounding_box(text, mode) {
            Err(Error::Parse { .. }) => match parse_point(text, mode) {
                Err(Error::Parse { .. }) => Err(Error::parse(text, mode.expected())),
                point => point.map(Argument::Point),
            },
            bbox => bbox.map(Argument::BoundingBox),
        }
    } else {
        parse_tile_index(text, zoom)
            .and_then(|(x, y)| Tile::from_xy(x, y, zoom))
            .map(Argument::Tile)
    };
    let argument = classified?;
    debug!("'{}' -> {:?}", text, argument);
    Ok(argument)
}
