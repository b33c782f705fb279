// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An addressable two-dimensional field.  One concrete type backs
//! every intermediate product of a carve: the energy map (`Grid<f64>`)
//! and the cumulative-cost-plus-backpointer grid the seam finder
//! builds and discards each iteration.

use std::ops::{Index, IndexMut};

/// A dense row-major grid of copyable cells.
#[derive(Debug, Clone)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// Allocate a grid of default-valued cells.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a grid from an existing row-major vector.  Panics if the
    /// vector does not hold exactly `width * height` cells; this is a
    /// programming error, not an input error.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        Grid {
            width,
            height,
            cells,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The backing row-major store, mutable.  Used by the threaded
    /// energy calculator to hand each worker its own band of rows.
    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.cells
    }

    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
