//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Text output

use crate::options::Options;
use std::error::Error;
use std::io::{self, Write};
use tile_grid::{tile_limits, Argument, BoundingBox, GridIterator, Tile, TILE_SIZE};

pub type ReportResult = Result<(), Box<dyn Error>>;

pub fn write_tile_info<W: Write>(out: &mut W, tile: &Tile, tile_url: &str) -> io::Result<()> {
    writeln!(
        out,
        "Tile X={} Y={} Z={} Latitude={:.6} Longitude={:.6}\nURL:",
        tile.x, tile.y, tile.zoom, tile.lat, tile.lon
    )?;
    writeln!(out, "- View   : {}", tile.view_url(tile_url))?;
    writeln!(out, "- Status : {}", tile.status_url(tile_url))
}

/// Tile ranges, map size and corner tiles of a bounding box
pub fn write_bbox_info<W: Write>(
    out: &mut W,
    bbox: &BoundingBox,
    zoom: u8,
    tile_url: &str,
) -> ReportResult {
    let limits = tile_limits(bbox, zoom)?;
    writeln!(
        out,
        "X: {}..{} ({}) Y: {}..{} ({})",
        limits.minx,
        limits.maxx,
        limits.width(),
        limits.miny,
        limits.maxy,
        limits.height()
    )?;
    writeln!(
        out,
        "Map size : width={} height={}",
        limits.width() as u64 * TILE_SIZE as u64,
        limits.height() as u64 * TILE_SIZE as u64
    )?;
    let min_tile = Tile::from_point(&bbox.min_corner(), zoom)?;
    let max_tile = Tile::from_point(&bbox.max_corner(), zoom)?;
    write_tile_info(out, &min_tile, tile_url)?;
    write_tile_info(out, &max_tile, tile_url)?;
    Ok(())
}

/// One `z/x/y` line per tile, written as the tiles are produced
pub fn write_tile_list<W, I>(out: &mut W, tiles: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Tile>,
{
    for tile in tiles {
        writeln!(out, "{}", tile.path())?;
    }
    Ok(())
}

pub fn write_argument<W: Write>(out: &mut W, arg: &Argument, options: &Options) -> ReportResult {
    match arg {
        Argument::Point(point) => {
            let tile = Tile::from_point(point, options.zoom)?;
            write_tile_info(out, &tile, &options.tile_url)?;
        }
        Argument::Tile(tile) => write_tile_info(out, tile, &options.tile_url)?,
        Argument::BoundingBox(bbox) => {
            write_bbox_info(out, bbox, options.zoom, &options.tile_url)?;
            if options.list {
                let griditer = GridIterator::covering(bbox, &options.list_zooms())?;
                info!("Listing {} tiles", griditer.size_hint().0);
                write_tile_list(out, griditer.tiles())?;
            }
        }
    }
    Ok(())
}
