// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line options.

use crate::error::CarveError;
use clap::{value_t, App, Arg};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// The image to carve.
    pub input: PathBuf,
    /// Where the carved image goes.  The format follows the extension.
    pub output: PathBuf,
    /// How many columns to remove.
    pub seams: u32,
    /// Optional grayscale rendering of the input's energy.
    pub energy: Option<PathBuf>,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("fwdseam")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Narrow an image by carving out its least important seams")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("seams")
                .help("Number of vertical seams to remove")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("energy")
                .short("e")
                .long("energy")
                .value_name("FILE")
                .help("Also write the input's energy map as a grayscale image")
                .takes_value(true),
        )
}

impl Options {
    /// Parse a full argument list, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Options, CarveError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        let seams = value_t!(matches, "seams", u32)?;
        Ok(Options {
            input: matches.value_of_os("input").map(PathBuf::from).unwrap_or_default(),
            output: matches.value_of_os("output").map(PathBuf::from).unwrap_or_default(),
            seams,
            energy: matches.value_of_os("energy").map(PathBuf::from),
        })
    }
}
