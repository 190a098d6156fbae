//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::options::{build_app, Options};
use tile_grid::{ErrorKind, InputMode, Result};

fn options(argv: &[&str]) -> Result<Options> {
    let matches = build_app()
        .get_matches_from_safe(argv.iter().cloned())
        .unwrap();
    Options::from_args(&matches)
}

#[test]
fn test_options() {
    let opt = options(&["osmtile", "--lon-lat", "--zoom", "10", "-0.0014,51.4778"]).unwrap();
    assert_eq!(
        opt,
        Options {
            mode: InputMode::LonLat,
            zoom: 10,
            maxzoom: None,
            list: false,
            tile_url: "https://tile.openstreetmap.org".to_string(),
            args: vec!["-0.0014,51.4778".to_string()],
        }
    );

    let opt = options(&["osmtile", "--x-y", "-z", "15", "16895,11768", "16896,11768"]).unwrap();
    assert_eq!(opt.mode, InputMode::XY);
    assert_eq!(opt.zoom, 15);
    assert_eq!(opt.args.len(), 2);

    // zoom defaults to 0
    let opt = options(&["osmtile", "--lat-lon", "0,0"]).unwrap();
    assert_eq!(opt.zoom, 0);
    assert_eq!(opt.list_zooms(), vec![0]);
}

#[test]
fn test_input_mode_required() {
    let err = options(&["osmtile", "--zoom", "10", "45,5"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(
        err.to_string(),
        "indicate an option --lat-lon, --lon-lat, --x-y"
    );
    let err = options(&["osmtile", "--lat-lon", "--x-y", "45,5"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_zoom_options() {
    for zoom in &["20", "255", "abc", "1.5"] {
        let err = options(&["osmtile", "--lat-lon", "--zoom", *zoom, "45,5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config, "zoom {}", zoom);
    }
    assert!(options(&["osmtile", "--lat-lon", "--zoom", "19", "45,5"]).is_ok());

    let err = options(&[
        "osmtile",
        "--lat-lon",
        "-z",
        "13",
        "--maxzoom",
        "12",
        "45,5",
    ])
    .unwrap_err();
    assert_eq!(err.to_string(), "maxzoom 12 lower than zoom 13");
    let err = options(&["osmtile", "--lat-lon", "--maxzoom", "20", "45,5"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let opt = options(&[
        "osmtile",
        "--lat-lon",
        "-z",
        "13",
        "--maxzoom",
        "15",
        "--list",
        "45.088666,5.618289,45.148789,5.700169",
    ])
    .unwrap();
    assert!(opt.list);
    assert_eq!(opt.maxzoom, Some(15));
    assert_eq!(opt.list_zooms(), vec![13, 14, 15]);
}

#[test]
fn test_arguments_required() {
    let err = options(&["osmtile", "--lat-lon", "--zoom", "10"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(err.to_string(), "no argument given");
}

#[test]
fn test_tile_url() {
    let opt = options(&[
        "osmtile",
        "--x-y",
        "--tile-url",
        "https://tile.example.org/osm/",
        "0,0",
    ])
    .unwrap();
    assert_eq!(opt.tile_url, "https://tile.example.org/osm");
}
