// Copyright 2026 the Gradiento Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple pixmap type.

use crate::color::Argb;

/// A pixmap of packed ARGB pixels.
#[derive(Debug, Clone)]
pub struct Pixmap {
    /// Width of the pixmap in pixels.
    width: u16,
    /// Height of the pixmap in pixels.
    height: u16,
    /// Buffer of the pixmap, in row-major order.
    buf: Vec<Argb>,
}

impl Pixmap {
    /// Create a new pixmap with the given width and height in pixels.
    ///
    /// All pixels are initialized to transparent black.
    pub fn new(width: u16, height: u16) -> Self {
        let buf = vec![Argb::TRANSPARENT; width as usize * height as usize];
        Self { width, height, buf }
    }

    /// Create a new pixmap with the given pixel data.
    ///
    /// The pixels are in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the `data` vector is not of length `width * height`.
    pub fn from_parts(data: Vec<Argb>, width: u16, height: u16) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "pixmap data must be exactly width * height long"
        );
        Self {
            width,
            height,
            buf: data,
        }
    }

    /// Width of the pixmap in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of the pixmap in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the location is out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Argb {
        debug_assert!(x < self.width && y < self.height);
        self.buf[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the location is out of bounds.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Argb) {
        debug_assert!(x < self.width && y < self.height);
        self.buf[y as usize * self.width as usize + x as usize] = color;
    }

    /// The underlying pixels, in row-major order.
    pub fn data(&self) -> &[Argb] {
        &self.buf
    }

    /// The underlying pixels viewed as raw bytes.
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::Pixmap;
    use crate::color::Argb;

    #[test]
    fn pixel_roundtrip() {
        let mut pixmap = Pixmap::new(4, 3);
        assert_eq!(pixmap.pixel(2, 1), Argb::TRANSPARENT);
        pixmap.set_pixel(2, 1, Argb::WHITE);
        assert_eq!(pixmap.pixel(2, 1), Argb::WHITE);
        assert_eq!(pixmap.data()[6], Argb::WHITE);
    }

    #[test]
    fn byte_view_length() {
        let pixmap = Pixmap::new(4, 3);
        assert_eq!(pixmap.data_as_u8_slice().len(), 4 * 3 * 4);
    }

    #[test]
    #[should_panic]
    fn from_parts_checks_length() {
        let _ = Pixmap::from_parts(vec![Argb::TRANSPARENT; 5], 4, 3);
    }
}
