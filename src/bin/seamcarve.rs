// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The command-line surface: decode an image file, carve it down to
//! the requested width, encode the result.  All the carving lives in
//! the library; this binary is only the decoder/encoder collaborator.

use clap::{App, Arg};
use seamcarve::{seamcarve, Image};

fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let matches = App::new("seamcarve")
        .version("0.1.0")
        .about("Content-aware horizontal image shrinking")
        .arg(
            Arg::with_name("INPUT")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .short("w")
                .takes_value(true)
                .required(true)
                .help("Target width in pixels"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (must equal the input height)"),
        )
        .get_matches();

    let decoded = image::open(matches.value_of("INPUT").unwrap())?;
    let img = Image::from_view(&decoded.to_rgb())?;

    let new_width: u32 = matches.value_of("width").unwrap().parse()?;
    let new_height: u32 = match matches.value_of("height") {
        Some(h) => h.parse()?,
        None => img.height(),
    };

    let carved = seamcarve(&img, new_width, new_height)?;
    carved.to_rgb8().save(matches.value_of("OUTPUT").unwrap())?;
    Ok(())
}
