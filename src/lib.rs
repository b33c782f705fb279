// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware horizontal image shrinking ("seam carving").
//!
//! Repeatedly finds and removes the lowest-importance vertical seam
//! from an image until it reaches a target width.  Each iteration
//! computes a Scharr-gradient energy map, runs a dynamic program to
//! find the cheapest top-to-bottom connected path through it, and
//! deletes that path, one pixel per row.
//!
//! ```
//! use seamcarve::{seamcarve, Image};
//!
//! # fn main() -> Result<(), seamcarve::CarveError> {
//! let img = Image::from_rows(vec![
//!     vec![[9.0; 3], [0.0; 3], [9.0; 3]],
//!     vec![[9.0; 3], [0.0; 3], [9.0; 3]],
//! ])?;
//! let carved = seamcarve(&img, 2, 2)?;
//! assert_eq!(carved.dimensions(), (2, 2));
//! # Ok(())
//! # }
//! ```

pub mod ternary;

pub mod error;
pub use error::CarveError;

pub mod grid;
pub use grid::Grid;

pub mod image;
pub use crate::image::Image;

pub mod energy;
#[cfg(feature = "threaded")]
pub use energy::calculate_energy_threaded;
pub use energy::{calculate_energy, EnergyMap};

pub mod seamfinder;
pub use seamfinder::find_vertical_seam;

pub mod seamcarver;
pub use seamcarver::{remove_vertical_seam, seamcarve};
