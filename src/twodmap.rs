// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional storage
//!
//! Every intermediate product of a carve (the pixel grid, the energy
//! map, the cumulative cost map) is a rectangle of values.  They all
//! share this one row-major container.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  The content type is a
/// pixel's colour channels for the grid being carved, or a plain
/// `f64` for the energy and cost maps.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the
    /// buffer is not exactly `width * height` long.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`, in the same order as `image`'s `dimensions()`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// One full row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    // Every lookup, `row` included, goes through here.  Rows are laid
    // end to end, so a pixel's offset is whole rows above it plus its
    // column.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// Per-pixel importance scores.
pub type EnergyMap = TwoDimensionalMap<f64>;

/// Minimum cumulative seam cost reaching each pixel from the top row.
pub type CostMap = TwoDimensionalMap<f64>;
