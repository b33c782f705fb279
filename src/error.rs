// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carver's failure taxonomy.  Every user-visible failure is
//! reported before any carving work begins; once the inputs are
//! well-formed the energy, seam, and removal steps are total.

use failure::Fail;

/// Everything that can go wrong while carving.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The requested dimensions imply vertical resizing or enlarging,
    /// neither of which is supported.  Raised before any computation.
    #[fail(
        display = "unsupported resize from {}x{} to {}x{}: {}",
        width, height, target_width, target_height, reason
    )]
    UnsupportedResize {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
        reason: &'static str,
    },

    /// The input image has a zero dimension or ragged rows.  Detected
    /// at construction, before any energy or seam computation.
    #[fail(display = "malformed image: {}", _0)]
    MalformedImage(String),

    /// A seam handed to the remover has the wrong length or an
    /// out-of-bounds column.  This can only arise from a defect in the
    /// seam finder, so it is fatal rather than retryable.
    #[fail(display = "invalid seam: {}", _0)]
    InvalidSeam(String),
}
