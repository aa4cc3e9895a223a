// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fixed 3×3 kernels and the one convolution that applies them.
//!
//! The gradient energy and all three forward-energy neighbour
//! matrices are the same sliding-window reduction with different
//! weights: for each interior pixel, for each kernel and each colour
//! channel, take the weighted sum of the 3×3 neighbourhood, and add up
//! the absolute values of all of those sums.

use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// Weights indexed as `kernel[dy + 1][dx + 1]`.
pub type Kernel = [[i32; 3]; 3];

/// Scharr horizontal gradient.
pub const SCHARR_X: Kernel = [[-3, 0, 3], [-10, 0, 10], [-3, 0, 3]];

/// Scharr vertical gradient.
pub const SCHARR_Y: Kernel = [[-3, -10, -3], [0, 0, 0], [3, 10, 3]];

/// The new horizontal neighbours left behind when the pixel is removed.
pub const FORWARD_X: Kernel = [[0, 0, 0], [-1, 0, 1], [0, 0, 0]];

/// The new vertical neighbours when the seam steps in from the left.
pub const FORWARD_Y_LEFT: Kernel = [[0, 0, 0], [0, 0, 1], [0, -1, 0]];

/// The new vertical neighbours when the seam steps in from the right.
pub const FORWARD_Y_RIGHT: Kernel = [[0, 0, 0], [1, 0, 0], [0, -1, 0]];

// The response of one kernel, one channel at a time, around (x, y).
// Callers guarantee (x, y) is not on the border.
fn respond(grid: &PixelGrid, kernel: &Kernel, x: u32, y: u32) -> [f64; 3] {
    let mut sums = [0.0; 3];
    for (ky, kx) in iproduct!(0..3u32, 0..3u32) {
        let weight = kernel[ky as usize][kx as usize];
        if weight == 0 {
            continue;
        }
        let pixel = grid[(x + kx - 1, y + ky - 1)];
        for (sum, channel) in sums.iter_mut().zip(pixel.iter()) {
            *sum += channel * f64::from(weight);
        }
    }
    sums
}

/// Apply every kernel in `kernels` to every interior pixel of `grid`
/// and sum the absolute per-channel responses.  Pixels on the border
/// have no full neighbourhood and are left at zero.
pub fn convolve(grid: &PixelGrid, kernels: &[Kernel]) -> TwoDimensionalMap<f64> {
    let (width, height) = grid.dimensions();
    let mut out = TwoDimensionalMap::new(width, height);
    let interior = iproduct!(
        1..height.saturating_sub(1),
        1..width.saturating_sub(1)
    );
    for (y, x) in interior {
        out[(x, y)] = kernels.iter().fold(0.0, |total, kernel| {
            respond(grid, kernel, x, y)
                .iter()
                .fold(total, |total, sum| total + sum.abs())
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every channel of column x holds 10 * x.
    fn ramp(width: u32, height: u32) -> PixelGrid {
        let data = iproduct!(0..height, 0..width)
            .map(|(_, x)| {
                let v = f64::from(x) * 10.0;
                [v, v, v]
            })
            .collect();
        PixelGrid::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn scharr_on_a_horizontal_ramp() {
        let grid = ramp(3, 3);
        // (3 + 10 + 3) * (20 - 0) per channel, nothing vertically.
        assert_eq!(convolve(&grid, &[SCHARR_X])[(1, 1)], 960.0);
        assert_eq!(convolve(&grid, &[SCHARR_Y])[(1, 1)], 0.0);
        assert_eq!(convolve(&grid, &[SCHARR_X, SCHARR_Y])[(1, 1)], 960.0);
    }

    #[test]
    fn forward_kernels_on_a_horizontal_ramp() {
        let grid = ramp(3, 3);
        assert_eq!(convolve(&grid, &[FORWARD_X])[(1, 1)], 60.0);
        assert_eq!(convolve(&grid, &[FORWARD_Y_LEFT])[(1, 1)], 30.0);
        assert_eq!(convolve(&grid, &[FORWARD_Y_RIGHT])[(1, 1)], 30.0);
    }

    #[test]
    fn forward_kernels_tell_left_from_right() {
        // 10 per column, 40 per row: the pixel right of (1, 1) is 60,
        // the one left of it 40, and the one below 90.
        let data = iproduct!(0..3u32, 0..3u32)
            .map(|(y, x)| [f64::from(x * 10 + y * 40); 3])
            .collect();
        let grid = PixelGrid::from_vec(3, 3, data).unwrap();
        assert_eq!(convolve(&grid, &[FORWARD_X])[(1, 1)], 60.0);
        assert_eq!(convolve(&grid, &[FORWARD_Y_LEFT])[(1, 1)], 90.0);
        assert_eq!(convolve(&grid, &[FORWARD_Y_RIGHT])[(1, 1)], 150.0);
    }

    #[test]
    fn channels_are_summed_as_absolute_values() {
        let mut grid = PixelGrid::new(3, 3);
        grid[(0, 1)] = [10.0, 0.0, 0.0];
        grid[(2, 1)] = [0.0, 10.0, 0.0];
        // red falls by 10, green rises by 10: they must not cancel.
        assert_eq!(convolve(&grid, &[FORWARD_X])[(1, 1)], 20.0);
    }

    #[test]
    fn border_is_left_at_zero() {
        let grid = ramp(4, 4);
        let out = convolve(&grid, &[SCHARR_X]);
        for x in 0..4 {
            assert_eq!(out[(x, 0)], 0.0);
            assert_eq!(out[(x, 3)], 0.0);
        }
        for y in 0..4 {
            assert_eq!(out[(0, y)], 0.0);
            assert_eq!(out[(3, y)], 0.0);
        }
    }

    #[test]
    fn degenerate_grids_have_no_interior() {
        let out = convolve(&ramp(2, 5), &[SCHARR_X, SCHARR_Y]);
        assert!(out.as_slice().iter().all(|e| *e == 0.0));
    }
}
