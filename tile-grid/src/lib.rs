//! Conversions between WGS84 coordinates and OpenStreetMap slippy map tiles
//!
//! ## Tile of a position
//!
//! ```rust
//! use tile_grid::{Tile, OSM_TILE_URL};
//!
//! // Greenwich Royal Observatory
//! let tile = Tile::from_lat_lon(51.4778, -0.0014, 10).unwrap();
//! assert_eq!((tile.x, tile.y, tile.zoom), (511, 340, 10));
//! assert_eq!(
//!     tile.view_url(OSM_TILE_URL),
//!     "https://tile.openstreetmap.org/10/511/340.png"
//! );
//!
//! // Zoom levels above 19 and tile numbers outside the grid are rejected
//! assert!(Tile::from_lat_lon(0.0, 0.0, 20).is_err());
//! assert!(Tile::from_xy(5, 5, 0).is_err());
//! ```
//!
//! ## Tiles covering a bounding box
//!
//! ```rust
//! use tile_grid::{tile_limits, tiles_covering, BoundingBox, ExtentInt};
//!
//! let bbox = BoundingBox::new(45.088666, 5.618289, 45.148789, 5.700169).unwrap();
//! assert_eq!(
//!     tile_limits(&bbox, 13).unwrap(),
//!     ExtentInt {
//!         minx: 4223,
//!         miny: 2942,
//!         maxx: 4225,
//!         maxy: 2944,
//!     }
//! );
//! assert_eq!(tiles_covering(&bbox, 13).unwrap().len(), 9);
//! ```
//!
//! ## Command line arguments
//!
//! ```rust
//! use tile_grid::{classify, Argument, InputMode};
//!
//! match classify("-0.0014,51.4778", InputMode::LonLat, 10).unwrap() {
//!     Argument::Point(p) => assert_eq!((p.lat, p.lon), (51.4778, -0.0014)),
//!     _ => panic!(),
//! }
//! assert!(classify("16895,11768", InputMode::XY, 14).is_err());
//! ```

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod coord;
mod error;
mod grid;
mod grid_iterator;
mod parse;

#[cfg(test)]
mod coord_test;

pub use coord::{validate_latitude, validate_longitude, BoundingBox, Point};
pub use error::{Error, ErrorKind, Result};
pub use grid::{
    point_to_tile, tile_limits, tile_to_point, validate_zoom, Extent, ExtentInt, Tile, MAX_ZOOM,
    MERCATOR_MAX_LAT, OSM_TILE_URL, TILE_SIZE,
};
pub use grid_iterator::{tiles_covering, tiles_covering_zooms, tiles_for_zoom, GridIterator};
pub use parse::{classify, parse_bounding_box, parse_point, parse_tile_index, Argument, InputMode};
