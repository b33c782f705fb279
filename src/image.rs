// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The in-memory pixel grid the carver operates on.
//!
//! Pixels are held as three `f64` channels so that nothing clips or
//! rounds during the intermediate gradient arithmetic.  Decoding from
//! the `image` crate's integer formats happens on the way in
//! ([`Image::from_view`]), and clamping back to byte range happens on
//! the way out ([`Image::to_rgb8`]); the carving core itself never
//! quantizes.

use crate::cq;
use crate::error::CarveError;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use itertools::iproduct;
use num_traits::NumCast;
use std::ops::{Index, IndexMut};

/// One pixel: three floating-point channels.
pub type Channels = [f64; 3];

/// A height×width grid of three-channel floating-point pixels.
///
/// Invariant: `width` and `height` are positive and `pixels` holds
/// exactly `width * height` entries in row-major order.  The
/// constructors are the only way to build one, so a held `Image` is
/// always well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Channels>,
}

impl Image {
    /// Build an image from a row-major pixel vector.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<Channels>) -> Result<Image, CarveError> {
        if width == 0 || height == 0 {
            return Err(CarveError::MalformedImage(format!(
                "dimensions {}x{} are not positive",
                width, height
            )));
        }
        if pixels.len() != width as usize * height as usize {
            return Err(CarveError::MalformedImage(format!(
                "{} pixels cannot fill a {}x{} grid",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(Image {
            width,
            height,
            pixels,
        })
    }

    /// Build an image from rows of pixels, checking that every row has
    /// the same length.
    pub fn from_rows(rows: Vec<Vec<Channels>>) -> Result<Image, CarveError> {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
        if let Some(bad) = rows.iter().position(|r| r.len() != width as usize) {
            return Err(CarveError::MalformedImage(format!(
                "row {} has {} pixels, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }
        Image::from_raw(width, height, rows.into_iter().flatten().collect())
    }

    /// The decoder boundary: lift any of the `image` crate's pixel
    /// formats into the floating-point grid.  Generic the same way the
    /// rest of the ecosystem is, over `GenericImageView`.
    pub fn from_view<I, P, S>(view: &I) -> Result<Image, CarveError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = view.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::MalformedImage(format!(
                "decoded view has dimensions {}x{}",
                width, height
            )));
        }
        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let rgb = view.get_pixel(x, y).to_rgb();
                let c = rgb.channels();
                // NumCast from a Primitive subpixel to f64 cannot fail.
                [
                    NumCast::from(c[0]).unwrap(),
                    NumCast::from(c[1]).unwrap(),
                    NumCast::from(c[2]).unwrap(),
                ]
            })
            .collect();
        Image::from_raw(width, height, pixels)
    }

    /// The encoder boundary: round and clamp each channel into byte
    /// range.  This is the only place quantization happens.
    pub fn to_rgb8(&self) -> RgbImage {
        let mut out: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(self.width, self.height);
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let p = self[(x, y)];
            let cs = [clamp_channel(p[0]), clamp_channel(p[1]), clamp_channel(p[2])];
            out.put_pixel(x, y, *Pixel::from_slice(&cs));
        }
        out
    }

    // Same index math as grid.rs; see the admonition there.
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

    /// The pixel at (x, y), with both coordinates clamped into bounds.
    /// This is the edge-replication rule the gradient kernels rely on:
    /// reads past a border see the nearest edge pixel.
    pub fn get_clamped(&self, x: i64, y: i64) -> Channels {
        let cx = cq!(x < 0, 0, cq!(x >= self.width as i64, self.width as i64 - 1, x)) as u32;
        let cy = cq!(y < 0, 0, cq!(y >= self.height as i64, self.height as i64 - 1, y)) as u32;
        self[(cx, cy)]
    }
}

fn clamp_channel(v: f64) -> u8 {
    cq!(v < 0.0, 0.0, cq!(v > 255.0, 255.0, v)).round() as u8
}

impl Index<(u32, u32)> for Image {
    type Output = Channels;

    fn index(&self, (x, y): (u32, u32)) -> &Channels {
        let index = self.get_index(x, y);
        &self.pixels[index]
    }
}

impl IndexMut<(u32, u32)> for Image {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Channels {
        let index = self.get_index(x, y);
        &mut self.pixels[index]
    }
}
