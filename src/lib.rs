// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image narrowing by seam carving.
//!
//! Each carve computes a gradient energy for every pixel, accumulates
//! the forward-energy cost of reaching each pixel from the top, traces
//! the cheapest connected top-to-bottom seam and cuts it out.

pub mod config;
pub mod dump;
pub mod energy;
pub mod error;
pub mod forwardenergy;
pub mod kernel;
pub mod pixelgrid;
pub mod seamcarver;
pub mod seamfinder;
pub mod ternary;
pub mod twodmap;

pub use energy::calculate_energy;
pub use error::CarveError;
pub use forwardenergy::cumulative_cost;
pub use pixelgrid::{load_grid, save_grid, PixelGrid};
pub use seamcarver::{check_seam_count, remove_vertical_seam, seamcarve, SeamCarver};
pub use seamfinder::{trace_seam, SeamFinder};
