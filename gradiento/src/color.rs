// Copyright 2026 the Gradiento Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A packed ARGB color type.

use bytemuck::{Pod, Zeroable};
use core::fmt;

/// A 32-bit packed ARGB color, with alpha in the most significant byte.
///
/// This matches the in-memory pixel representation consumed by the
/// surrounding rasterizer. Channels are not premultiplied.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Pack the four channels into a color.
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Linearly interpolate from `self` towards `other`.
    ///
    /// Each channel is interpolated independently and rounded to the nearest
    /// integer. `t` is expected to be in `[0, 1]`; values outside that range
    /// saturate per channel rather than wrapping.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        fn chan(c1: u8, c2: u8, t: f32) -> u8 {
            (c1 as f32 + t * (c2 as f32 - c1 as f32) + 0.5) as u8
        }
        Self::from_channels(
            chan(self.alpha(), other.alpha(), t),
            chan(self.red(), other.red(), t),
            chan(self.green(), other.green(), t),
            chan(self.blue(), other.blue(), t),
        )
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb({:#010x})", self.0)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}
