// Copyright 2026 the Gradiento Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaders mapping device pixels onto a color ramp or a tiled pixmap.

use std::f64::consts::TAU;
use std::sync::Arc;

use kurbo::{Affine, Point};

use crate::color::Argb;
use crate::pixmap::Pixmap;
use crate::ramp::GradientRamp;
use crate::tile::TileMode;
use crate::Error;

/// The geometry of a gradient.
#[derive(Copy, Clone, Debug)]
pub enum GradientKind {
    /// A gradient along the line from `start` to `end`.
    Linear {
        /// Point the ramp starts at.
        start: Point,
        /// Point the ramp ends at.
        end: Point,
    },
    /// A circular gradient around `center`, reaching the end of the ramp at
    /// `radius`.
    Radial {
        /// Center of the gradient.
        center: Point,
        /// Radius at which the ramp ends.
        radius: f64,
    },
    /// An angular sweep around `center`, starting at the positive x axis and
    /// covering one full turn.
    Sweep {
        /// Center of the sweep.
        center: Point,
    },
}

impl GradientKind {
    /// Reduce a gradient-space point to a scalar position along the ramp.
    ///
    /// Positions outside `[0, 1]` are returned as-is; the tiling policy is
    /// applied at sample time. Degenerate geometry (a zero-length axis or a
    /// zero radius) produces non-finite positions, which the sampling path
    /// resolves to a boundary table entry.
    fn position(&self, p: Point) -> f32 {
        match *self {
            Self::Linear { start, end } => {
                let d = end - start;
                let v = p - start;
                ((v.x * d.x + v.y * d.y) / d.hypot2()) as f32
            }
            Self::Radial { center, radius } => ((p - center).hypot() / radius) as f32,
            Self::Sweep { center } => {
                let v = p - center;
                (v.y.atan2(v.x).rem_euclid(TAU) / TAU) as f32
            }
        }
    }
}

/// A color ramp swept across a geometry.
///
/// The transform maps device space into gradient space, so the same shader
/// can be sampled under different view transforms without rebuilding the
/// ramp.
#[derive(Clone, Debug)]
pub struct GradientShader {
    kind: GradientKind,
    ramp: GradientRamp,
    transform: Affine,
}

impl GradientShader {
    /// Create a shader with explicit stop offsets.
    ///
    /// The stop contract is that of [`GradientRamp::new`].
    pub fn new(
        kind: GradientKind,
        colors: &[Argb],
        positions: &[f32],
        tile_mode: TileMode,
    ) -> Result<Self, Error> {
        Ok(Self {
            kind,
            ramp: GradientRamp::new(colors, positions, tile_mode)?,
            transform: Affine::IDENTITY,
        })
    }

    /// Create a shader whose stops are spaced evenly over `[0, 1]`.
    pub fn from_colors(
        kind: GradientKind,
        colors: &[Argb],
        tile_mode: TileMode,
    ) -> Result<Self, Error> {
        Ok(Self {
            kind,
            ramp: GradientRamp::from_colors(colors, tile_mode)?,
            transform: Affine::IDENTITY,
        })
    }

    /// Set the device-to-gradient transform.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// The geometry of this shader.
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    /// The underlying ramp.
    pub fn ramp(&self) -> &GradientRamp {
        &self.ramp
    }

    /// Resolve the color of the device-space point `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> Argb {
        let p = self.transform * Point::new(x, y);
        self.ramp.sample(self.kind.position(p))
    }
}

/// A pixmap tiled across the plane, with an independent tiling policy per
/// axis.
#[derive(Clone, Debug)]
pub struct BitmapShader {
    pixmap: Arc<Pixmap>,
    x_tile: TileMode,
    y_tile: TileMode,
    transform: Affine,
}

impl BitmapShader {
    /// Create a shader tiling `pixmap`.
    ///
    /// # Panics
    ///
    /// Panics if the pixmap is empty; there is no pixel to extend an empty
    /// axis with.
    pub fn new(pixmap: Arc<Pixmap>, x_tile: TileMode, y_tile: TileMode) -> Self {
        assert!(
            pixmap.width() > 0 && pixmap.height() > 0,
            "cannot tile an empty pixmap"
        );
        Self {
            pixmap,
            x_tile,
            y_tile,
            transform: Affine::IDENTITY,
        }
    }

    /// Set the device-to-bitmap transform.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Resolve the color of the device-space point `(x, y)`.
    ///
    /// The transformed point is floored onto the pixel grid and each axis is
    /// wrapped by its tile mode.
    pub fn sample(&self, x: f64, y: f64) -> Argb {
        let p = self.transform * Point::new(x, y);
        let ix = self
            .x_tile
            .wrap_coordinate(p.x.floor() as i32, self.pixmap.width() as i32);
        let iy = self
            .y_tile
            .wrap_coordinate(p.y.floor() as i32, self.pixmap.height() as i32);
        self.pixmap.pixel(ix as u16, iy as u16)
    }
}
