// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! Validates the requested dimensions, then drives the per-seam loop:
//! recompute the energy map from the current image, find the cheapest
//! vertical seam, remove it, and replace the current image with the
//! result.  Each iteration commits atomically; there is never a
//! half-carved image to roll back.

use crate::energy::calculate_energy;
use crate::error::CarveError;
use crate::image::Image;
use crate::seamfinder::find_vertical_seam;
use log::debug;

/// Delete one pixel per row at the seam's column, shifting everything
/// to its right one column left.  The input image is untouched; the
/// caller swaps in the returned, narrower image.
pub fn remove_vertical_seam(image: &Image, seam: &[u32]) -> Result<Image, CarveError> {
    let (width, height) = image.dimensions();
    if seam.len() != height as usize {
        return Err(CarveError::InvalidSeam(format!(
            "seam has {} rows, image has {}",
            seam.len(),
            height
        )));
    }
    if let Some((y, &col)) = seam.iter().enumerate().find(|(_, &col)| col >= width) {
        return Err(CarveError::InvalidSeam(format!(
            "seam column {} at row {} is outside width {}",
            col, y, width
        )));
    }
    let mut pixels = Vec::with_capacity((width as usize - 1) * height as usize);
    for y in 0..height {
        let col = seam[y as usize];
        for x in 0..width {
            if x != col {
                pixels.push(image[(x, y)]);
            }
        }
    }
    Image::from_raw(width - 1, height, pixels)
}

/// Given an image and a desired new width and height, repeatedly
/// carve the cheapest vertical seam out of the image until it is
/// `new_width` wide.  Only horizontal shrinking is supported: a
/// request that changes the height, or grows either dimension, is
/// rejected before any work is done.
pub fn seamcarve(image: &Image, new_width: u32, new_height: u32) -> Result<Image, CarveError> {
    let (width, height) = image.dimensions();
    let unsupported = |reason| CarveError::UnsupportedResize {
        width,
        height,
        target_width: new_width,
        target_height: new_height,
        reason,
    };
    if new_width > width || new_height > height {
        return Err(unsupported("cannot enlarge an image"));
    }
    if new_height != height {
        return Err(unsupported("cannot resize vertically"));
    }
    if new_width == 0 {
        return Err(unsupported("cannot carve away every column"));
    }

    let seams = width - new_width;
    let mut scratch = image.clone();
    for n in 0..seams {
        let energy = calculate_energy(&scratch);
        let seam = find_vertical_seam(&energy);
        scratch = remove_vertical_seam(&scratch, &seam)?;
        debug!(
            "removed seam {} of {}, image now {}x{}",
            n + 1,
            seams,
            scratch.width(),
            scratch.height()
        );
    }
    Ok(scratch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey(v: f64) -> [f64; 3] {
        [v, v, v]
    }

    fn grey_rows(rows: &[&[f64]]) -> Image {
        Image::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| grey(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn removing_a_seam_keeps_the_flanking_columns() {
        let img = grey_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let out = remove_vertical_seam(&img, &[1, 1, 1]).unwrap();
        assert_eq!(out.dimensions(), (2, 3));
        assert_eq!(out[(0, 0)], grey(1.0));
        assert_eq!(out[(1, 0)], grey(3.0));
        assert_eq!(out[(0, 1)], grey(4.0));
        assert_eq!(out[(1, 1)], grey(6.0));
        assert_eq!(out[(0, 2)], grey(7.0));
        assert_eq!(out[(1, 2)], grey(9.0));
        // The input is a value; it must still be intact afterwards.
        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(img[(1, 1)], grey(5.0));
    }

    // Pixels left of the seam are untouched; pixels right of it shift
    // exactly one column left.
    #[test]
    fn removal_shifts_only_the_right_side() {
        let img = grey_rows(&[&[0.0, 1.0, 2.0, 3.0], &[4.0, 5.0, 6.0, 7.0]]);
        let out = remove_vertical_seam(&img, &[2, 0]).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out[(0, 0)], grey(0.0));
        assert_eq!(out[(1, 0)], grey(1.0));
        assert_eq!(out[(2, 0)], grey(3.0));
        assert_eq!(out[(0, 1)], grey(5.0));
        assert_eq!(out[(1, 1)], grey(6.0));
        assert_eq!(out[(2, 1)], grey(7.0));
    }

    #[test]
    fn wrong_length_seam_is_fatal() {
        let img = grey_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert!(matches!(
            remove_vertical_seam(&img, &[0]),
            Err(CarveError::InvalidSeam(_))
        ));
    }

    #[test]
    fn out_of_bounds_seam_is_fatal() {
        let img = grey_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert!(matches!(
            remove_vertical_seam(&img, &[0, 2]),
            Err(CarveError::InvalidSeam(_))
        ));
    }

    #[test]
    fn carve_to_same_width_is_identity() {
        let img = grey_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let out = seamcarve(&img, 2, 2).unwrap();
        assert_eq!(out, img);
    }

    // The low-contrast middle is the only place a cheap seam exists;
    // the high-contrast edge columns must survive the carve.
    #[test]
    fn carve_removes_the_flat_center() {
        let img = grey_rows(&[
            &[90.0, 0.0, 50.0, 0.0, 0.0, 90.0],
            &[90.0, 0.0, 50.0, 0.0, 0.0, 90.0],
            &[90.0, 0.0, 50.0, 0.0, 0.0, 90.0],
        ]);
        let out = seamcarve(&img, 5, 3).unwrap();
        assert_eq!(out.dimensions(), (5, 3));
        // Edge columns carry the sharpest gradients and must survive.
        for y in 0..3 {
            assert_eq!(out[(0, y)], grey(90.0));
            assert_eq!(out[(4, y)], grey(90.0));
        }
    }

    #[test]
    fn carve_reaches_any_smaller_width() {
        let img = grey_rows(&[
            &[9.0, 1.0, 5.0, 3.0],
            &[2.0, 8.0, 1.0, 7.0],
            &[4.0, 6.0, 2.0, 5.0],
        ]);
        for target in 1..=4u32 {
            let out = seamcarve(&img, target, 3).unwrap();
            assert_eq!(out.dimensions(), (target, 3));
        }
    }

    #[test]
    fn vertical_resize_is_rejected() {
        let img = grey_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert!(matches!(
            seamcarve(&img, 2, 1),
            Err(CarveError::UnsupportedResize { .. })
        ));
        assert!(matches!(
            seamcarve(&img, 2, 3),
            Err(CarveError::UnsupportedResize { .. })
        ));
    }

    #[test]
    fn enlarging_is_rejected() {
        let img = grey_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert!(matches!(
            seamcarve(&img, 3, 2),
            Err(CarveError::UnsupportedResize { .. })
        ));
    }

    #[test]
    fn zero_target_width_is_rejected() {
        let img = grey_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert!(matches!(
            seamcarve(&img, 0, 2),
            Err(CarveError::UnsupportedResize { .. })
        ));
    }
}
