// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative seam cost using the Avidan & Shamir "Forward Energy"
//! algorithm.
//!
//! Plain backward energy only counts what a seam removes.  Forward
//! energy also charges for the edges a removal *creates*: when a pixel
//! goes, its left and right neighbours become adjacent, and depending
//! on which way the seam arrived, so do pixels from adjacent rows.
//! Each of those new adjacencies is one of the neighbour matrices
//! below, computed once per carve against the unmodified grid.
//!
//! ```text
//!                      ⎧ M(x−1,y−1) + CU(x−1,y−1) + CL(x−1,y−1)
//! M(x,y) = e(x,y) + min⎨ M(x,y−1)   + CU(x,y−1)
//!                      ⎩ M(x+1,y−1) + CU(x+1,y−1) + CR(x+1,y−1)
//! ```
//!
//! The left and right arms are dropped at the corresponding edge.

use crate::kernel::{convolve, FORWARD_X, FORWARD_Y_LEFT, FORWARD_Y_RIGHT};
use crate::pixelgrid::PixelGrid;
use crate::twodmap::{CostMap, EnergyMap, TwoDimensionalMap};

/// The three neighbour-continuation matrices for one grid.
struct NeighborCosts {
    up: TwoDimensionalMap<f64>,
    left: TwoDimensionalMap<f64>,
    right: TwoDimensionalMap<f64>,
}

impl NeighborCosts {
    fn new(grid: &PixelGrid) -> Self {
        NeighborCosts {
            up: convolve(grid, &[FORWARD_X]),
            left: convolve(grid, &[FORWARD_Y_LEFT]),
            right: convolve(grid, &[FORWARD_Y_RIGHT]),
        }
    }
}

// The cheapest way to arrive at (x, y), given a fully populated row
// y - 1.  Only the value matters here; the tracer re-derives the path.
fn cost_candidate_pixel(
    cost: &CostMap,
    neighbors: &NeighborCosts,
    (x, y): (u32, u32),
) -> f64 {
    let y_above = y - 1;
    let max_width = cost.width() - 1;

    let mut best = cost[(x, y_above)] + neighbors.up[(x, y_above)];

    if x != 0 {
        let xl = x - 1;
        let from_left =
            cost[(xl, y_above)] + neighbors.up[(xl, y_above)] + neighbors.left[(xl, y_above)];
        best = best.min(from_left);
    }

    if x != max_width {
        let xr = x + 1;
        let from_right =
            cost[(xr, y_above)] + neighbors.up[(xr, y_above)] + neighbors.right[(xr, y_above)];
        best = best.min(from_right);
    }

    best
}

/// Accumulate the minimum forward-energy cost of reaching every pixel
/// from the top row.  The top row is the energy map's top row,
/// unchanged.
pub fn cumulative_cost(grid: &PixelGrid, energy: &EnergyMap) -> CostMap {
    let neighbors = NeighborCosts::new(grid);
    let (width, height) = energy.dimensions();
    let mut cost = energy.clone();

    for y in 1..height {
        for x in 0..width {
            cost[(x, y)] = energy[(x, y)] + cost_candidate_pixel(&cost, &neighbors, (x, y));
        }
    }
    cost
}
