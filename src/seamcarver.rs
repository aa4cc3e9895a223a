// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Find a seam, cut it out, and do it again against the narrower
//! image.  Every pass recomputes the energy from scratch: the grid has
//! changed shape, and the pixels either side of the old seam are now
//! neighbours.

use crate::cq;
use crate::error::CarveError;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{ForwardEnergy, SeamFinder};
use itertools::iproduct;
use log::{debug, info};

/// Build a new grid one column narrower, skipping the seam's pixel in
/// every row.  The old grid is left untouched.
pub fn remove_vertical_seam(grid: &PixelGrid, seam: &[u32]) -> PixelGrid {
    let (width, height) = grid.dimensions();
    let mut narrowed = PixelGrid::new(width - 1, height);
    for (y, x) in iproduct!(0..height, 0..width - 1) {
        let source = cq!(x < seam[y as usize], x, x + 1);
        narrowed[(x, y)] = grid[(source, y)];
    }
    narrowed
}

/// Reject a request that would carve the image away entirely.  The
/// carver itself never goes below one column, but callers should say
/// so up front rather than silently getting less than they asked for.
pub fn check_seam_count(width: u32, requested: u32) -> Result<(), CarveError> {
    if requested >= width {
        return Err(CarveError::TooManySeams { requested, width });
    }
    Ok(())
}

/// What the carver reports after each seam comes out.
#[derive(Debug)]
pub struct Progress<'a> {
    /// 1-based count of seams removed so far.
    pub iteration: u32,
    /// How many seams the caller asked for.
    pub requested: u32,
    /// Width of the grid after this removal.
    pub width: u32,
    /// The column removed from each row.
    pub seam: &'a [u32],
}

/// Holds the grid being carved, across as many carves as it takes.
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver with a grid to be carved.
    pub fn new(grid: PixelGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// Find and remove one seam, returning it.
    pub fn carve_once(&mut self) -> Vec<u32> {
        let seam = ForwardEnergy::new(&self.grid).find_vertical_seam();
        self.grid = remove_vertical_seam(&self.grid, &seam);
        seam
    }

    /// Remove up to `requested` seams, one at a time, stopping early if
    /// the grid gets down to a single column.  `observer` hears about
    /// every removal.  Returns the number of seams actually removed.
    pub fn remove_seams<F>(&mut self, requested: u32, mut observer: F) -> u32
    where
        F: FnMut(Progress),
    {
        let mut removed = 0;
        while removed < requested && self.grid.width() > 1 {
            let seam = self.carve_once();
            removed += 1;
            debug!("seam {}: {:?}", removed, seam);
            observer(Progress {
                iteration: removed,
                requested,
                width: self.grid.width(),
                seam: &seam,
            });
        }
        removed
    }
}

/// Carve `seams` columns out of `grid`, logging each one.
pub fn seamcarve(grid: PixelGrid, seams: u32) -> PixelGrid {
    let mut carver = SeamCarver::new(grid);
    carver.remove_seams(seams, |progress| {
        info!(
            "Removed seam {}/{} (new width: {})",
            progress.iteration, progress.requested, progress.width
        )
    });
    carver.into_grid()
}
