// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of an interior pixel is the sum of the absolute Scharr
//! gradients, horizontal and vertical, of each of its three colour
//! channels.  Border pixels have no full neighbourhood; they get a
//! fixed, very high energy instead so that seams keep off the edges
//! for as long as the image is big enough to let them.

use crate::kernel::{convolve, SCHARR_X, SCHARR_Y};
use crate::pixelgrid::PixelGrid;
use crate::twodmap::EnergyMap;

/// The energy assigned to every pixel on the image border.
pub const BORDER_ENERGY: f64 = 1000.0;

/// Compute the energy of every pixel in the grid.
pub fn calculate_energy(grid: &PixelGrid) -> EnergyMap {
    let mut emap = convolve(grid, &[SCHARR_X, SCHARR_Y]);
    let (width, height) = emap.dimensions();
    for x in 0..width {
        emap[(x, 0)] = BORDER_ENERGY;
        emap[(x, height - 1)] = BORDER_ENERGY;
    }
    for y in 0..height {
        emap[(0, y)] = BORDER_ENERGY;
        emap[(width - 1, y)] = BORDER_ENERGY;
    }
    emap
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    // A deterministic, busy pattern with no particular structure.
    fn noise(width: u32, height: u32) -> PixelGrid {
        let data = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let v = f64::from((x * 37 + y * 91 + x * y * 13) % 256);
                [v, 255.0 - v, f64::from((x * 7) % 256)]
            })
            .collect();
        PixelGrid::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn border_is_always_the_sentinel() {
        let (width, height) = (9, 6);
        let energy = calculate_energy(&noise(width, height));
        for x in 0..width {
            assert_eq!(energy[(x, 0)], BORDER_ENERGY);
            assert_eq!(energy[(x, height - 1)], BORDER_ENERGY);
        }
        for y in 0..height {
            assert_eq!(energy[(0, y)], BORDER_ENERGY);
            assert_eq!(energy[(width - 1, y)], BORDER_ENERGY);
        }
    }

    #[test]
    fn uniform_interior_has_no_energy() {
        let grid = PixelGrid::from_vec(5, 5, vec![[128.0; 3]; 25]).unwrap();
        let energy = calculate_energy(&grid);
        for (y, x) in iproduct!(1..4, 1..4) {
            assert_eq!(energy[(x, y)], 0.0);
        }
    }

    #[test]
    fn interior_energy_is_the_gradient_sum() {
        // A vertical ramp: 0 on top, 20 at the bottom, in all channels.
        let data = iproduct!(0..3u32, 0..3u32)
            .map(|(y, _)| [f64::from(y) * 10.0; 3])
            .collect();
        let grid = PixelGrid::from_vec(3, 3, data).unwrap();
        assert_eq!(calculate_energy(&grid)[(1, 1)], 960.0);
    }

    #[test]
    fn isolated_bright_centre_has_no_gradient_of_its_own() {
        let mut grid = PixelGrid::new(3, 3);
        grid[(1, 1)] = [255.0; 3];
        assert_eq!(calculate_energy(&grid)[(1, 1)], 0.0);
    }

    #[test]
    fn energy_is_never_negative() {
        let energy = calculate_energy(&noise(12, 8));
        assert!(energy.as_slice().iter().all(|e| *e >= 0.0));
    }
}
