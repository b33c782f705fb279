// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image.
//!
//! Energy is the Scharr gradient magnitude: each channel is convolved
//! with fixed 3×3 horizontal and vertical kernels, the absolute
//! responses are added, and the three channel results are summed into
//! one scalar per pixel.  Reads past a border replicate the nearest
//! edge pixel, so the same formula covers every pixel including the
//! corners.  No normalization is applied; the seam finder only ever
//! compares energies, never interprets their scale.

use crate::grid::Grid;
use crate::image::Image;
use itertools::iproduct;

/// The per-pixel importance map, recomputed from scratch before every
/// seam removal: deleting a seam changes its neighbors' gradients.
pub type EnergyMap = Grid<f64>;

// Scharr operator, horizontal and vertical.  The weights matter: the
// seam finder's output is only reproducible if every implementation
// agrees on them bit-for-bit.
const GX: [[f64; 3]; 3] = [
    [-3.0, 0.0, 3.0],
    [-10.0, 0.0, 10.0],
    [-3.0, 0.0, 3.0],
];
const GY: [[f64; 3]; 3] = [
    [-3.0, -10.0, -3.0],
    [0.0, 0.0, 0.0],
    [3.0, 10.0, 3.0],
];

/// The energy of a single pixel: |Gx| + |Gy| per channel, summed
/// across channels.
fn energy_at(image: &Image, x: u32, y: u32) -> f64 {
    let mut gx = [0.0f64; 3];
    let mut gy = [0.0f64; 3];
    for (ky, kx) in iproduct!(0..3usize, 0..3usize) {
        let p = image.get_clamped(x as i64 + kx as i64 - 1, y as i64 + ky as i64 - 1);
        for c in 0..3 {
            gx[c] += GX[ky][kx] * p[c];
            gy[c] += GY[ky][kx] * p[c];
        }
    }
    (0..3).map(|c| gx[c].abs() + gy[c].abs()).sum()
}

/// Compute the energy of every pixel in an image.  Pure function of
/// the current image; it keeps no memory of prior iterations.
pub fn calculate_energy(image: &Image) -> EnergyMap {
    let (width, height) = image.dimensions();
    let mut emap = EnergyMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_at(image, x, y);
    }
    emap
}

// Each pixel's energy depends only on the fixed current image, so the
// map splits cleanly into bands of rows, one per worker.  The result
// is bit-identical to the serial calculator.
#[cfg(feature = "threaded")]
pub fn calculate_energy_threaded(image: &Image) -> EnergyMap {
    let (width, height) = image.dimensions();
    let mut emap = EnergyMap::new(width, height);
    let workers = num_cpus::get().max(1);
    let band = ((height as usize + workers - 1) / workers).max(1);
    crossbeam::scope(|scope| {
        for (i, rows) in emap
            .as_mut_slice()
            .chunks_mut(band * width as usize)
            .enumerate()
        {
            let y0 = (i * band) as u32;
            scope.spawn(move |_| {
                for (j, cell) in rows.iter_mut().enumerate() {
                    let x = j as u32 % width;
                    let y = y0 + j as u32 / width;
                    *cell = energy_at(image, x, y);
                }
            });
        }
    })
    .expect("energy worker panicked");
    emap
}
