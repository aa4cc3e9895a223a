// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors at the edges of the carver.
//!
//! The carving core itself cannot fail.  Everything here belongs to
//! the boundary: reading and writing images, parsing the command
//! line, and checking a request before the core ever sees it.

use failure::Fail;

#[derive(Debug, Fail)]
pub enum CarveError {
    #[fail(display = "Image error: {}", _0)]
    Image(#[cause] image::ImageError),

    #[fail(display = "{}", _0)]
    Arguments(#[cause] clap::Error),

    #[fail(
        display = "Cannot remove {} seams from image with width {}",
        requested, width
    )]
    TooManySeams { requested: u32, width: u32 },

    #[fail(display = "Image has no pixels")]
    EmptyImage,
}

impl From<image::ImageError> for CarveError {
    fn from(err: image::ImageError) -> Self {
        CarveError::Image(err)
    }
}

impl From<clap::Error> for CarveError {
    fn from(err: clap::Error) -> Self {
        CarveError::Arguments(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_seams_names_both_numbers() {
        let err = CarveError::TooManySeams {
            requested: 12,
            width: 10,
        };
        assert_eq!(
            err.to_string(),
            "Cannot remove 12 seams from image with width 10"
        );
    }
}
