// Copyright 2026 the Gradiento Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient color ramps.
//!
//! A [`GradientRamp`] bakes its color stops into a fixed-resolution lookup
//! table on first use and resolves every later sample against that table.

use crate::color::Argb;
use crate::tile::TileMode;
use crate::Error;
use smallvec::SmallVec;

#[cfg(not(feature = "multithreading"))]
use core::cell::OnceCell;
// So we can just use `OnceCell` regardless of which feature is activated.
#[cfg(feature = "multithreading")]
use std::sync::OnceLock as OnceCell;

/// Number of interpolation intervals in a baked ramp.
///
/// The table holds `RAMP_SIZE + 1` entries, so both endpoints of the ramp are
/// represented exactly.
pub const RAMP_SIZE: usize = 100;

/// A single anchor of a color ramp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStop {
    /// Normalized offset of the stop along the ramp, in `[0, 1]`.
    pub offset: f32,
    /// Color of the ramp at `offset`.
    pub color: Argb,
}

/// An ordered list of color stops, non-decreasing in offset.
pub type ColorStops = SmallVec<[ColorStop; 4]>;

/// A color ramp with a tiling policy.
///
/// Construction validates the colors and sanitizes the stop offsets; after
/// that the ramp is immutable. The lookup table is baked lazily on the first
/// sample and reused for the lifetime of the ramp. Without the
/// `multithreading` feature the table lives in a `OnceCell` and the ramp is
/// not `Sync`; with it, a `OnceLock` is used instead and concurrent first
/// samples race benignly (the bake is a pure function of the stops).
#[derive(Clone, Debug)]
pub struct GradientRamp {
    stops: ColorStops,
    tile_mode: TileMode,
    lut: OnceCell<GradientLut>,
}

impl GradientRamp {
    /// Create a ramp with explicit stop offsets.
    ///
    /// `positions` must hold exactly one offset per color. The first offset
    /// is clamped to `[0, 1]` and each later offset is pulled up to at least
    /// its predecessor (and at most 1), so callers supplying out-of-order
    /// offsets get a monotonic ramp rather than an error.
    pub fn new(colors: &[Argb], positions: &[f32], tile_mode: TileMode) -> Result<Self, Error> {
        if colors.len() < 2 {
            return Err(Error::NeedsTwoColors(colors.len()));
        }
        if positions.len() != colors.len() {
            return Err(Error::MismatchedStops {
                colors: colors.len(),
                positions: positions.len(),
            });
        }

        let mut stops = ColorStops::with_capacity(colors.len());
        let mut prev = positions[0].clamp(0.0, 1.0);
        stops.push(ColorStop {
            offset: prev,
            color: colors[0],
        });
        for (&color, &position) in colors[1..].iter().zip(&positions[1..]) {
            let offset = position.clamp(prev, 1.0);
            if offset != position {
                log::debug!("gradient stop offset {position} pulled up to {offset}");
            }
            stops.push(ColorStop { offset, color });
            prev = offset;
        }

        Ok(Self {
            stops,
            tile_mode,
            lut: OnceCell::new(),
        })
    }

    /// Create a ramp whose stops are spaced evenly over `[0, 1]`.
    pub fn from_colors(colors: &[Argb], tile_mode: TileMode) -> Result<Self, Error> {
        if colors.len() < 2 {
            return Err(Error::NeedsTwoColors(colors.len()));
        }

        let last = (colors.len() - 1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop {
                offset: i as f32 / last,
                color,
            })
            .collect();

        Ok(Self {
            stops,
            tile_mode,
            lut: OnceCell::new(),
        })
    }

    /// The stops of this ramp, after sanitization.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// The tiling policy of this ramp.
    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    /// Resolve a position along the ramp to a color.
    ///
    /// Out-of-range positions are first folded into `[0, 1]` by the tile
    /// mode. Every finite position maps to a valid table entry; a NaN
    /// position resolves to the first entry via the saturating float cast
    /// rather than panicking.
    pub fn sample(&self, pos: f32) -> Argb {
        self.lut().get(self.tile_mode.wrap_unit(pos))
    }

    /// The baked lookup table, baking it on first use.
    pub fn lut(&self) -> &GradientLut {
        self.lut.get_or_init(|| GradientLut::new(&self.stops))
    }
}

/// A baked lookup table of `RAMP_SIZE + 1` colors.
#[derive(Clone, Debug)]
pub struct GradientLut {
    colors: Vec<Argb>,
}

impl GradientLut {
    /// Bake the table from a sanitized stop list.
    ///
    /// Walks the table and the stops with a single forward cursor, so the
    /// whole bake is one pass over both.
    fn new(stops: &[ColorStop]) -> Self {
        let mut colors = Vec::with_capacity(RAMP_SIZE + 1);
        let mut prev = 0;
        let mut next = 1;
        for i in 0..=RAMP_SIZE {
            let pos = i as f32 / RAMP_SIZE as f32;
            if pos < stops[0].offset {
                colors.push(stops[0].color);
                continue;
            }
            while next < stops.len() && stops[next].offset <= pos {
                prev = next;
                next += 1;
            }
            if next == stops.len() || pos == stops[prev].offset {
                colors.push(stops[prev].color);
            } else {
                let t = (pos - stops[prev].offset) / (stops[next].offset - stops[prev].offset);
                colors.push(stops[prev].color.lerp(stops[next].color, t));
            }
        }
        log::debug!("baked gradient ramp from {} stops", stops.len());
        Self { colors }
    }

    /// The color at normalized position `pos`, which must already be in
    /// `[0, 1]`.
    pub fn get(&self, pos: f32) -> Argb {
        self.colors[(pos * RAMP_SIZE as f32 + 0.5) as usize]
    }

    /// The raw table entries.
    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    /// The table entries viewed as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::{GradientRamp, RAMP_SIZE};
    use crate::color::Argb;
    use crate::tile::TileMode;
    use crate::Error;

    fn black_white(tile_mode: TileMode) -> GradientRamp {
        GradientRamp::from_colors(&[Argb::BLACK, Argb::WHITE], tile_mode).unwrap()
    }

    #[test]
    fn too_few_colors() {
        assert_eq!(
            GradientRamp::from_colors(&[Argb::BLACK], TileMode::Clamp).unwrap_err(),
            Error::NeedsTwoColors(1)
        );
        assert_eq!(
            GradientRamp::new(&[Argb::BLACK], &[0.0], TileMode::Clamp).unwrap_err(),
            Error::NeedsTwoColors(1)
        );
    }

    #[test]
    fn mismatched_stop_counts() {
        let err = GradientRamp::new(
            &[Argb::BLACK, Argb::WHITE, Argb::TRANSPARENT],
            &[0.0, 1.0],
            TileMode::Clamp,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::MismatchedStops {
                colors: 3,
                positions: 2,
            }
        );
    }

    #[test]
    fn black_to_white_clamp() {
        let ramp = black_white(TileMode::Clamp);
        assert_eq!(ramp.sample(0.0), Argb(0xFF00_0000));
        assert_eq!(ramp.sample(1.0), Argb(0xFFFF_FFFF));
        assert_eq!(ramp.sample(0.5), Argb(0xFF80_8080));
        assert_eq!(ramp.sample(-1.0), ramp.sample(0.0));
        assert_eq!(ramp.sample(2.0), ramp.sample(1.0));
    }

    #[test]
    fn black_to_white_repeat() {
        let ramp = black_white(TileMode::Repeat);
        assert_eq!(ramp.sample(1.5), ramp.sample(0.5));
        assert_eq!(ramp.sample(-0.75), ramp.sample(0.25));
    }

    #[test]
    fn black_to_white_mirror() {
        let ramp = black_white(TileMode::Mirror);
        assert_eq!(ramp.sample(1.5), ramp.sample(0.5));
        assert_eq!(ramp.sample(-0.5), ramp.sample(0.5));
        assert_eq!(ramp.sample(1.75), ramp.sample(0.25));
    }

    #[test]
    fn reproduces_stop_colors() {
        let colors = [Argb(0xFFFF_0000), Argb(0xFF00_FF00), Argb(0xFF00_00FF)];
        let ramp = GradientRamp::new(&colors, &[0.0, 0.25, 1.0], TileMode::Clamp).unwrap();
        assert_eq!(ramp.sample(0.0), colors[0]);
        assert_eq!(ramp.sample(0.25), colors[1]);
        assert_eq!(ramp.sample(1.0), colors[2]);
    }

    #[test]
    fn channels_are_monotonic() {
        let ramp = black_white(TileMode::Clamp);
        let mut last = ramp.sample(0.0);
        for i in 1..=RAMP_SIZE {
            let c = ramp.sample(i as f32 / RAMP_SIZE as f32);
            assert!(c.red() >= last.red());
            assert!(c.green() >= last.green());
            assert!(c.blue() >= last.blue());
            last = c;
        }
    }

    #[test]
    fn even_spacing() {
        let colors = [Argb(0xFF11_1111), Argb(0xFF22_2222), Argb(0xFF33_3333)];
        let ramp = GradientRamp::from_colors(&colors, TileMode::Clamp).unwrap();
        let offsets: Vec<f32> = ramp.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(ramp.sample(0.5), colors[1]);
    }

    #[test]
    fn out_of_order_offsets_are_pulled_up() {
        let colors = [Argb::BLACK, Argb::WHITE, Argb::TRANSPARENT];
        let ramp = GradientRamp::new(&colors, &[0.5, 0.2, 0.9], TileMode::Clamp).unwrap();
        let offsets: Vec<f32> = ramp.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.5, 0.5, 0.9]);
    }

    #[test]
    fn offsets_are_clamped_to_unit_range() {
        let colors = [Argb::BLACK, Argb::WHITE];
        let ramp = GradientRamp::new(&colors, &[-0.5, 1.5], TileMode::Clamp).unwrap();
        let offsets: Vec<f32> = ramp.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 1.0]);
    }

    #[test]
    fn lut_is_baked_once_with_full_resolution() {
        let ramp = black_white(TileMode::Clamp);
        let first = ramp.lut() as *const _;
        let _ = ramp.sample(0.3);
        assert_eq!(ramp.lut().colors().len(), RAMP_SIZE + 1);
        assert_eq!(ramp.lut() as *const _, first);
    }

    #[test]
    fn lut_bytes_match_entries() {
        let ramp = black_white(TileMode::Clamp);
        let lut = ramp.lut();
        assert_eq!(lut.as_bytes().len(), (RAMP_SIZE + 1) * 4);
        assert_eq!(
            lut.as_bytes()[..4],
            lut.colors()[0].0.to_ne_bytes(),
        );
    }

    #[test]
    fn duplicate_offsets_do_not_divide_by_zero() {
        let colors = [Argb::BLACK, Argb::WHITE, Argb(0xFFFF_0000)];
        let ramp = GradientRamp::new(&colors, &[0.0, 0.5, 0.5], TileMode::Clamp).unwrap();
        // Past the duplicated offset the later stop wins.
        assert_eq!(ramp.sample(0.5), Argb(0xFFFF_0000));
        assert_eq!(ramp.sample(0.25), Argb(0xFF80_8080));
    }
}
