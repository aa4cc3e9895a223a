// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam discovery
//!
//! Walk a cumulative cost map from the bottom row back to the top,
//! producing one column index per row.  The tie-breaking here is
//! deliberate and must stay exactly as written: leftmost minimum on
//! the bottom row, then "stay, left, right" on the way up, replacing
//! the current choice only when something is strictly cheaper.  Two
//! runs over the same image must carve the same seams.

use crate::energy::calculate_energy;
use crate::forwardenergy::cumulative_cost;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::CostMap;

/// This trait defines how we get seams out of an image.  It's a
/// primitive interface, just enough to make room for a different
/// energy model or for caching between carves.
pub trait SeamFinder {
    /// Return the x-coordinate of the seam in each row, top to bottom.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// Given a cost map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn trace_seam(cost: &CostMap) -> Vec<u32> {
    let (width, height) = cost.dimensions();
    let max_width = width - 1;
    let mut seam = vec![0; height as usize];

    // Find the x coordinate of the bottommost pixel with the least
    // cost.  `min_by` would hand back the last of equal elements.
    let bottom = cost.row(height - 1);
    let mut seam_col = 0;
    for x in 1..width {
        if bottom[x as usize] < bottom[seam_col as usize] {
            seam_col = x;
        }
    }
    seam[height as usize - 1] = seam_col;

    for y in (0..height - 1).rev() {
        let prev = seam_col;
        let mut best = cost[(prev, y)];

        if prev > 0 && cost[(prev - 1, y)] < best {
            best = cost[(prev - 1, y)];
            seam_col = prev - 1;
        }

        if prev < max_width && cost[(prev + 1, y)] < best {
            seam_col = prev + 1;
        }

        seam[y as usize] = seam_col;
    }
    seam
}

/// The forward-energy seam engine: a reference to the grid, and the
/// pipeline that turns it into a seam.
pub struct ForwardEnergy<'a> {
    /// A reference to the grid we'll be carving.
    pub grid: &'a PixelGrid,
}

impl<'a> ForwardEnergy<'a> {
    /// Takes a reference to a grid, and holds onto it.
    pub fn new(grid: &'a PixelGrid) -> Self {
        ForwardEnergy { grid }
    }
}

impl<'a> SeamFinder for ForwardEnergy<'a> {
    fn find_vertical_seam(&self) -> Vec<u32> {
        let energy = calculate_energy(self.grid);
        trace_seam(&cumulative_cost(self.grid, &energy))
    }
}
