//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod options;
mod report;

#[cfg(test)]
mod options_test;

use clap::ArgMatches;
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use options::{build_app, Options};
use std::env;
use std::io::{self, BufWriter, Write};
use std::process;
use tile_grid::{classify, Argument};

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG").ok();
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_deref()) {
        (Some(loglevel), _) => loglevel,
        (None, Some(rust_log)) => rust_log,
        (None, None) => "warn",
    };
    builder.parse_filters(rust_log);

    builder.init();
}

/// Classify every argument, then write the report.
///
/// Nothing is written when one argument is invalid.
fn run<W: Write>(options: &Options, out: &mut W) -> Result<(), String> {
    info!(
        "{} argument(s) as {:?} at zoom {}",
        options.args.len(),
        options.mode,
        options.zoom
    );
    let arguments = options
        .args
        .iter()
        .map(|arg| classify(arg, options.mode, options.zoom))
        .collect::<Result<Vec<Argument>, _>>()
        .map_err(|e| e.to_string())?;
    for arg in &arguments {
        if options.list {
            if let Argument::Point(_) | Argument::Tile(_) = arg {
                warn!("Ignoring `list` for {:?}", arg);
            }
        }
        report::write_argument(out, arg, options).map_err(|e| e.to_string())?;
    }
    out.flush().map_err(|e| e.to_string())
}

fn main() {
    dotenv().ok();
    let matches = build_app()
        .get_matches_from_safe(env::args())
        .unwrap_or_else(|e| e.exit());
    init_logger(&matches);
    let options = Options::from_args(&matches).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        process::exit(1)
    });
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(err) = run(&options, &mut out) {
        eprintln!("Error: {}", err);
        process::exit(1)
    }
}
