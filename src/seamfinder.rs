// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the minimum-energy vertical seam through an energy map.
//!
//! A straight dynamic program, Viterbi-shaped: a forward pass
//! accumulates the cheapest cost of reaching each cell from the top
//! row while recording which predecessor achieved it, and a backward
//! pass walks the recorded parents from the cheapest bottom-row cell
//! back to the top.  The cost-and-parent grid lives only for the
//! duration of one call; nothing is cached between iterations.

use crate::cq;
use crate::energy::EnergyMap;
use crate::grid::Grid;

/// The running cost of the cheapest seam through a cell, plus the
/// column in the row above that produced it.
#[derive(Default, Debug, Copy, Clone)]
struct CostAndParent {
    cost: f64,
    parent: u32,
}

// The tie-break rule, fixed for reproducible output: scan the
// candidates left to right and keep the first strict minimum, so the
// leftmost of any tied set wins.  Iterator::min_by would keep the
// *last* minimum, which is the opposite rule.
fn leftmost_min_by_cost(
    range: std::ops::RangeInclusive<u32>,
    cost_of: impl Fn(u32) -> f64,
) -> u32 {
    let mut best_x = *range.start();
    let mut best = cost_of(best_x);
    for x in range.skip(1) {
        let c = cost_of(x);
        if c < best {
            best = c;
            best_x = x;
        }
    }
    best_x
}

/// Given an energy map, return the list of x-coordinates that, when
/// zipped with the range (0..height), give the XY coordinates for
/// each pixel in the seam to be removed.  The result always has one
/// entry per row, every entry is in bounds, and adjacent entries
/// differ by at most one column.
pub fn find_vertical_seam(energy: &EnergyMap) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    let mut target: Grid<CostAndParent> = Grid::new(width, height);

    // The first row's cumulative cost is its raw energy.
    for x in 0..width {
        target[(x, 0)].cost = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // For every subsequent row, each cell's cost is its own energy
    // plus the cheapest cost among the up-to-three cells above it.
    for y in 1..height {
        for x in 0..width {
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            let parent_x = leftmost_min_by_cost(range, |px| target[(px, y - 1)].cost);
            target[(x, y)] = CostAndParent {
                cost: energy[(x, y)] + target[(parent_x, y - 1)].cost,
                parent: parent_x,
            };
        }
    }

    // Find the bottom-row column where the cheapest seam ends.
    let mut seam_col = leftmost_min_by_cost(0..=maxwidth, |x| target[(x, height - 1)].cost);
    // Working backwards, collect the x coordinate of each row of the
    // seam, then reverse into top-to-bottom order.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emap(rows: &[&[f64]]) -> EnergyMap {
        let width = rows[0].len() as u32;
        let height = rows.len() as u32;
        EnergyMap::from_raw(width, height, rows.concat())
    }

    fn is_connected(seam: &[u32]) -> bool {
        seam.windows(2)
            .all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1)
    }

    // The center column is the unique minimum of every row and forms a
    // valid vertical path, so the seam must run straight down it.
    #[test]
    fn straight_center_seam() {
        let energies = emap(&[&[9.0, 2.0, 8.0], &[5.0, 1.0, 7.0], &[6.0, 3.0, 4.0]]);
        assert_eq!(find_vertical_seam(&energies), [1, 1, 1]);
    }

    #[test]
    fn diagonal_seam_is_followed() {
        let energies = emap(&[&[1.0, 9.0, 9.0], &[9.0, 1.0, 9.0], &[9.0, 9.0, 1.0]]);
        assert_eq!(find_vertical_seam(&energies), [0, 1, 2]);
    }

    // Columns 0 and 2 both cost zero end to end; the leftmost of the
    // tied seams must win deterministically.
    #[test]
    fn ties_resolve_leftmost() {
        let energies = emap(&[&[0.0, 9.0, 0.0], &[0.0, 9.0, 0.0], &[0.0, 9.0, 0.0]]);
        assert_eq!(find_vertical_seam(&energies), [0, 0, 0]);
    }

    // On an all-equal map every path ties; leftmost-wins propagates
    // all the way up, pinning the seam to column zero.
    #[test]
    fn uniform_map_pins_to_column_zero() {
        let energies = emap(&[&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]]);
        assert_eq!(find_vertical_seam(&energies), [0, 0]);
    }

    // A cheap cell more than one column away must not be reachable:
    // the seam can move at most one column per row.
    #[test]
    fn seam_stays_connected() {
        let energies = emap(&[
            &[9.0, 9.0, 9.0, 0.0],
            &[0.0, 9.0, 9.0, 9.0],
            &[9.0, 9.0, 9.0, 0.0],
        ]);
        let seam = find_vertical_seam(&energies);
        assert_eq!(seam.len(), 3);
        assert!(is_connected(&seam));
        assert!(seam.iter().all(|&x| x < 4));
    }

    #[test]
    fn single_row_picks_global_minimum() {
        let energies = emap(&[&[4.0, 2.0, 7.0, 2.0]]);
        assert_eq!(find_vertical_seam(&energies), [1]);
    }

    #[test]
    fn single_column_is_the_only_seam() {
        let energies = emap(&[&[3.0], &[8.0], &[1.0]]);
        assert_eq!(find_vertical_seam(&energies), [0, 0, 0]);
    }
}
