// Copyright 2026 the Gradiento Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient color ramps and tiling policies for software rasterizers.
//!
//! Gradiento bakes a list of color stops into a fixed-resolution lookup
//! table and resolves arbitrary sample positions against it, folding
//! out-of-range positions back into the ramp domain with a [`TileMode`]
//! (clamp, repeat or mirror). On top of the ramp it provides the thin shader
//! layer a rasterizer needs: linear, radial and sweep gradient geometries,
//! and per-axis tiling of a [`Pixmap`].
//!
//! Colors are packed 32-bit ARGB values ([`Argb`]), the representation the
//! surrounding pixel pipeline consumes directly.
//!
//! # Features
//!
//! - `multithreading`: allow sharing shaders across threads. The ramp lookup
//!   table is then baked behind a [`OnceLock`](std::sync::OnceLock) instead
//!   of a [`OnceCell`](core::cell::OnceCell); a concurrent first sample at
//!   worst re-bakes the same table, and the first writer wins.

pub mod color;
pub mod pixmap;
pub mod ramp;
pub mod shader;
pub mod tile;

/// Re-export of the geometry types used by the shader layer.
pub use kurbo;

pub use color::Argb;
pub use pixmap::Pixmap;
pub use ramp::{ColorStop, ColorStops, GradientLut, GradientRamp, RAMP_SIZE};
pub use shader::{BitmapShader, GradientKind, GradientShader};
pub use tile::TileMode;

use thiserror::Error;

/// Errors that can occur when constructing a gradient.
///
/// Sampling itself is infallible: once constructed, every position resolves
/// to a table entry.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A gradient needs at least two colors.
    #[error("gradient needs at least 2 colors, got {0}")]
    NeedsTwoColors(usize),
    /// The color and position lists must be of equal length.
    #[error("got {colors} colors but {positions} positions")]
    MismatchedStops {
        /// Number of colors supplied.
        colors: usize,
        /// Number of positions supplied.
        positions: usize,
    },
}
