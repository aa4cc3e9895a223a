// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid, and the way in and out of it.
//!
//! Channels are decoded from eight bits into `f64` so that the
//! gradient arithmetic never has to worry about overflow or integer
//! truncation.  They are clamped back into `[0, 255]` only when the
//! grid is handed back to `image` for encoding.

use crate::error::CarveError;
use crate::twodmap::TwoDimensionalMap;
use image::{Rgb, RgbImage};
use itertools::iproduct;
use num_traits::clamp;
use std::path::Path;

/// One pixel's red, green and blue channels.
pub type Channels = [f64; 3];

/// The image being carved.
pub type PixelGrid = TwoDimensionalMap<Channels>;

/// Lift an eight-bit RGB image into a pixel grid.
pub fn from_image(image: &RgbImage) -> PixelGrid {
    let (width, height) = image.dimensions();
    let mut grid = PixelGrid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        grid[(x, y)] = [f64::from(r), f64::from(g), f64::from(b)];
    }
    grid
}

#[inline]
fn to_subpixel(channel: f64) -> u8 {
    // Scoped here: at module level `NumCast::from` collides with `f64::from`.
    use num_traits::NumCast;
    <u8 as NumCast>::from(clamp(channel, 0.0, 255.0)).unwrap_or(0)
}

/// Lower a pixel grid back to eight-bit RGB, clamping each channel.
pub fn to_image(grid: &PixelGrid) -> RgbImage {
    let (width, height) = grid.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let [r, g, b] = grid[(x, y)];
        Rgb([to_subpixel(r), to_subpixel(g), to_subpixel(b)])
    })
}

/// Decode any image format `image` understands into a grid.
pub fn load_grid<Q: AsRef<Path>>(path: Q) -> Result<PixelGrid, CarveError> {
    let image = image::open(path)?.to_rgb8();
    if image.width() == 0 || image.height() == 0 {
        return Err(CarveError::EmptyImage);
    }
    Ok(from_image(&image))
}

/// Encode the grid; the format is chosen from the file extension.
pub fn save_grid<Q: AsRef<Path>>(grid: &PixelGrid, path: Q) -> Result<(), CarveError> {
    to_image(grid).save(path)?;
    Ok(())
}
