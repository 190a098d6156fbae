//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use clap::{App, AppSettings, ArgMatches};
use tile_grid::{validate_zoom, Error, InputMode, Result, OSM_TILE_URL};

const EXAMPLES: &str = "EXAMPLES:
   # get tile number for Greenwich Royal Observatory
   osmtile --lon-lat --zoom 10 -0.0014,51.4778

   # get tiles list for a bounding box
   osmtile --lat-lon --zoom 13 45.088666,5.618289,45.148789,5.700169

   # list every tile of a bounding box from zoom 13 to 15
   osmtile --lat-lon --zoom 13 --maxzoom 15 --list 45.088666,5.618289,45.148789,5.700169

   # get coordinates for a tile number
   osmtile --x-y --zoom 15 16895,11768";

pub fn build_app() -> App<'static, 'static> {
    App::new("osmtile")
        .version(crate_version!())
        .author("Jérôme Villafruela <jerome.villafruela@gmail.com>")
        .about("OpenStreetMap Tile Calculator\n\nConverts between coordinates and tile numbers")
        .setting(AppSettings::AllowLeadingHyphen)
        .args_from_usage(
            "--lat-lon 'argument is latitude,longitude'
             --lon-lat 'argument is longitude,latitude'
             --x-y 'argument is a tile number x,y'
             -z, --zoom=[LEVEL] 'zoom level (0..19, Default: 0)'
             --maxzoom=[LEVEL] 'last zoom level listed with --list'
             --list 'list every tile covering bounding box arguments'
             --tile-url=[URL] 'tile server base URL (Default: https://tile.openstreetmap.org)'
             --loglevel=[error|warn|info|debug|trace] 'Log level (Default: warn)'
             [ARG]... 'lat,lon | lon,lat | lat1,lon1,lat2,lon2 | lon1,lat1,lon2,lat2 | x,y'",
        )
        .after_help(EXAMPLES)
}

/// Validated command line options
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub mode: InputMode,
    pub zoom: u8,
    pub maxzoom: Option<u8>,
    pub list: bool,
    pub tile_url: String,
    pub args: Vec<String>,
}

fn zoom_from_arg(args: &ArgMatches<'_>, name: &str) -> Result<Option<u8>> {
    args.value_of(name)
        .map(|s| {
            s.trim()
                .parse::<u8>()
                .map_err(|_| Error::Config(format!("invalid {} value '{}'", name, s)))
                .and_then(validate_zoom)
        })
        .transpose()
}

impl Options {
    pub fn from_args(args: &ArgMatches<'_>) -> Result<Options> {
        let zoom = zoom_from_arg(args, "zoom")?.unwrap_or(0);
        let maxzoom = zoom_from_arg(args, "maxzoom")?;
        if let Some(maxzoom) = maxzoom {
            if maxzoom < zoom {
                return Err(Error::Config(format!(
                    "maxzoom {} lower than zoom {}",
                    maxzoom, zoom
                )));
            }
        }
        let mode = InputMode::from_flags(
            args.is_present("lat-lon"),
            args.is_present("lon-lat"),
            args.is_present("x-y"),
        )?;
        let list = args.is_present("list");
        if maxzoom.is_some() && !list {
            warn!("Ignoring argument `maxzoom` without `list`");
        }
        let tile_url = args
            .value_of("tile-url")
            .unwrap_or(OSM_TILE_URL)
            .trim_end_matches('/')
            .to_string();
        let args: Vec<String> = args
            .values_of("ARG")
            .map(|values| values.map(String::from).collect())
            .unwrap_or_default();
        if args.is_empty() {
            return Err(Error::Config("no argument given".to_string()));
        }
        Ok(Options {
            mode,
            zoom,
            maxzoom,
            list,
            tile_url,
            args,
        })
    }

    /// Zoom levels enumerated for bounding boxes with `--list`
    pub fn list_zooms(&self) -> Vec<u8> {
        (self.zoom..=self.maxzoom.unwrap_or(self.zoom)).collect()
    }
}
