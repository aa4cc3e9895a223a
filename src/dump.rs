// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as a grayscale image, brightest where the
//! energy is highest.  Handy for seeing what the carver sees.

use crate::cq;
use crate::twodmap::EnergyMap;
use image::{GrayImage, Luma};
use num_traits::{clamp, NumCast};

pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let max = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    GrayImage::from_fn(width, height, |x, y| {
        let scaled = cq!(max > 0.0, energy[(x, y)] * 255.0 / max, 0.0);
        let level = clamp(scaled, 0.0, 255.0);
        Luma([<u8 as NumCast>::from(level).unwrap_or(0)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_to_the_brightest_pixel() {
        let energy = EnergyMap::from_vec(3, 1, vec![0.0, 500.0, 1000.0]).unwrap();
        let image = energy_to_image(&energy);
        assert_eq!(image.as_raw(), &vec![0, 127, 255]);
    }

    #[test]
    fn flat_energy_stays_black() {
        let energy = EnergyMap::new(2, 2);
        assert!(energy_to_image(&energy).as_raw().iter().all(|l| *l == 0));
    }
}
