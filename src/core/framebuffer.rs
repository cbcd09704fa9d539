// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 rastrix contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pixel framebuffer with pinned indexed access and UV sampling
//!
//! A [`Framebuffer`] owns one contiguous, row-major store of [`Color`]
//! elements. The same type serves as a visible-color buffer and, filled with
//! depth elements, as a depth buffer. Access goes through an explicitly
//! pinned view: the buffer is pinned on construction, and callers may
//! [`Framebuffer::unpin`] and re-[`Framebuffer::pin`] it across its life.
//!
//! # Coordinate System
//!
//! Pixels are stored row-major, `index = y * width + x`. For file-sourced
//! buffers, row 0 is the image's *bottom* row (the decoder's top-left origin
//! is flipped to this layer's bottom-left sampling convention).

use super::color::Color;
use super::error::{RasterError, Result};

/// How UV coordinates outside `[0, 1)` are treated during [`Framebuffer::get`]
///
/// The default is [`AddressMode::Passthrough`]: no normalization at all,
/// which makes out-of-range sampling the caller's problem. `Clamp` and
/// `Wrap` are opt-in for callers that want safe edges or tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressMode {
    /// Use the computed texel coordinates as-is (default)
    #[default]
    Passthrough,
    /// Pin out-of-range coordinates to the nearest edge texel
    Clamp,
    /// Tile coordinates by their fractional part
    Wrap,
}

/// Dense 2D store of [`Color`] elements with pinned access
///
/// # Lifecycle
///
/// Constructed with explicit dimensions and immediately pinned; usable for
/// indexed and sampled access while pinned; explicitly unpinned before the
/// backing storage is dropped or handed elsewhere. Re-pinning yields a fresh
/// valid view. The pin is a contract marker: Rust never relocates the
/// backing allocation, but the two-phase acquire/release is preserved so
/// callers can express (and debug builds can check) view validity.
///
/// # Examples
///
/// ```
/// use rastrix::core::{Color, Framebuffer};
///
/// let mut fb = Framebuffer::new(64, 32)?;
/// assert_eq!(fb.color_len(), 64 * 32);
/// assert_eq!(fb.byte_len(), 64 * 32 * 4);
///
/// fb.set_pixel(3, 2, Color::rgb(255, 0, 0));
/// assert_eq!(fb.pixel(3, 2), Color::rgb(255, 0, 0));
/// # Ok::<(), rastrix::core::RasterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels
    width: usize,

    /// Height in pixels
    height: usize,

    /// Backing store: `width * height` elements, row-major
    data: Vec<Color>,

    /// Pin marker for the addressable view
    ///
    /// The pixel view must only be dereferenced while this is set. Checked
    /// with `debug_assert!` in debug builds, unchecked in release.
    pinned: bool,

    /// UV normalization applied by [`Framebuffer::get`]
    address_mode: AddressMode,
}

impl Framebuffer {
    /// Create a framebuffer with the given dimensions, pinned
    ///
    /// All pixels start as the zero word, which reads as transparent black
    /// through the channel view and as 0.0 through the depth view.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if either dimension is
    /// zero; no buffer is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastrix::core::Framebuffer;
    ///
    /// let fb = Framebuffer::new(320, 240)?;
    /// assert!(fb.is_pinned());
    ///
    /// assert!(Framebuffer::new(0, 240).is_err());
    /// # Ok::<(), rastrix::core::RasterError>(())
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        let mut fb = Self {
            width,
            height,
            data: vec![Color::from_bits(0); width * height],
            pinned: false,
            address_mode: AddressMode::default(),
        };
        fb.pin();

        log::trace!("Allocated {}x{} framebuffer ({} bytes)", width, height, fb.byte_len());

        Ok(fb)
    }

    /// Load a framebuffer from an image file
    ///
    /// Decoding is delegated to the `image` crate; any raster format it
    /// supports is accepted. The decoded image is flipped vertically so that
    /// buffer row 0 holds the image's bottom row, then each RGBA pixel is
    /// copied row-major into the corresponding [`Color`] slot. The decoded
    /// intermediate is dropped once the copy completes.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::ImageLoad`] if the file cannot be opened or
    /// decoded. Construction is all-or-nothing: on error no partially filled
    /// buffer is observable.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rastrix::core::Framebuffer;
    ///
    /// let texture = Framebuffer::from_file("assets/checker.png")?;
    /// # Ok::<(), rastrix::core::RasterError>(())
    /// ```
    pub fn from_file(path: &str) -> Result<Self> {
        let decoded = image::open(path).map_err(|source| RasterError::ImageLoad {
            path: path.to_string(),
            source,
        })?;

        // Decoder origin is top-left; this layer samples bottom-left
        let rgba = decoded.flipv().into_rgba8();
        let (width, height) = rgba.dimensions();

        let mut fb = Self::new(width as usize, height as usize)?;
        for (slot, pixel) in fb.pixels_mut().iter_mut().zip(rgba.pixels()) {
            *slot = Color::from(pixel.0);
        }

        log::debug!("Loaded {}x{} framebuffer from '{}'", width, height, path);

        Ok(fb)
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixel elements (`width * height`)
    pub fn color_len(&self) -> usize {
        self.data.len()
    }

    /// Size of the backing store in bytes (`color_len * 4`)
    pub fn byte_len(&self) -> usize {
        self.data.len() * std::mem::size_of::<Color>()
    }

    /// Whether the addressable view is currently pinned
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Acquire (or refresh) the addressable view over the backing store
    ///
    /// Idempotent: pinning an already-pinned buffer just re-establishes the
    /// view.
    pub fn pin(&mut self) {
        self.pinned = true;
    }

    /// Release the addressable view
    ///
    /// The pixel view must not be dereferenced again until re-pinned. The
    /// caller is responsible for not unpinning while another operation still
    /// holds a reference into the view.
    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// The pinned pixel view, row-major
    ///
    /// # Panics
    ///
    /// Debug builds assert the buffer is pinned.
    pub fn pixels(&self) -> &[Color] {
        debug_assert!(self.pinned, "pixel view dereferenced while unpinned");
        &self.data
    }

    /// The pinned pixel view, mutable
    ///
    /// # Panics
    ///
    /// Debug builds assert the buffer is pinned.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        debug_assert!(self.pinned, "pixel view dereferenced while unpinned");
        &mut self.data
    }

    /// The backing store as raw bytes, `byte_len` long
    ///
    /// Little-endian channel order per element (R, G, B, A). This is the
    /// interchange surface for display upload or external consumers.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels())
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline(always)]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels()[y * self.width + x]
    }

    /// Write the pixel at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = y * self.width + x;
        self.pixels_mut()[index] = color;
    }

    /// Fill every element with one value
    ///
    /// Per-frame clear for both buffer roles: [`Color::BLACK`] for a color
    /// buffer, [`Color::DEPTH_ZERO`] for a depth buffer.
    ///
    /// # Panics
    ///
    /// Debug builds assert the buffer is pinned.
    pub fn fill(&mut self, color: Color) {
        self.pixels_mut().fill(color);
    }

    /// Currently configured UV address mode
    pub fn address_mode(&self) -> AddressMode {
        self.address_mode
    }

    /// Set the UV address mode applied by [`Framebuffer::get`]
    pub fn set_address_mode(&mut self, mode: AddressMode) {
        self.address_mode = mode;
    }

    /// Sample the texel at normalized coordinates `(u, v)`
    ///
    /// The texel index is `floor(v * height) * width + floor(u * width)`.
    /// Under the default [`AddressMode::Passthrough`] no clamping or
    /// wrapping is performed: coordinates outside `[0, 1)` produce an
    /// out-of-range index, and the caller is expected to pre-validate.
    /// [`AddressMode::Clamp`] and [`AddressMode::Wrap`] normalize the texel
    /// coordinates first.
    ///
    /// # Panics
    ///
    /// Under `Passthrough`, panics if the computed index lies outside the
    /// buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastrix::core::{Color, Framebuffer};
    ///
    /// let mut fb = Framebuffer::new(8, 4)?;
    /// fb.set_pixel(3, 2, Color::rgb(0, 255, 0));
    /// assert_eq!(fb.get(3.5 / 8.0, 2.5 / 4.0), Color::rgb(0, 255, 0));
    /// # Ok::<(), rastrix::core::RasterError>(())
    /// ```
    pub fn get(&self, u: f32, v: f32) -> Color {
        let x = (u * self.width as f32) as i64;
        let y = (v * self.height as f32) as i64;

        let (x, y) = match self.address_mode {
            AddressMode::Passthrough => (x as usize, y as usize),
            AddressMode::Clamp => (
                x.clamp(0, self.width as i64 - 1) as usize,
                y.clamp(0, self.height as i64 - 1) as usize,
            ),
            AddressMode::Wrap => {
                // Tiling needs floor, not truncation: a negative fractional
                // coordinate would otherwise land one texel off
                let x = (u * self.width as f32).floor() as i64;
                let y = (v * self.height as f32).floor() as i64;
                (
                    x.rem_euclid(self.width as i64) as usize,
                    y.rem_euclid(self.height as i64) as usize,
                )
            }
        };

        self.pixels()[y * self.width + x]
    }
}


#[cfg(test)]
mod pin_tests {
    use super::*;

    #[test]
    fn test_pin_cycle() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        assert!(fb.is_pinned());

        fb.unpin();
        assert!(!fb.is_pinned());

        fb.pin();
        assert!(fb.is_pinned());

        // Re-pinning an already-pinned buffer is allowed
        fb.pin();
        assert!(fb.is_pinned());
    }

    #[test]
    fn test_contents_survive_pin_cycle() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.set_pixel(1, 1, Color::rgb(1, 2, 3));

        fb.unpin();
        fb.pin();

        assert_eq!(fb.pixel(1, 1), Color::rgb(1, 2, 3));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pixel view dereferenced while unpinned")]
    fn test_unpinned_view_asserts_in_debug() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.unpin();
        let _ = fb.pixels();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pixel view dereferenced while unpinned")]
    fn test_unpinned_fill_asserts_in_debug() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.unpin();
        fb.fill(Color::BLACK);
    }
}

#[cfg(test)]
mod sampling_tests {
    use super::*;

    #[test]
    fn test_get_round_trips_written_pixel() {
        let mut fb = Framebuffer::new(8, 4).unwrap();
        let c = Color::new(12, 34, 56, 78);

        // Linear index 19 = row 2, column 3
        fb.pixels_mut()[19] = c;

        let u = 3.5 / 8.0;
        let v = 2.5 / 4.0;
        assert_eq!((v * 4.0) as usize * 8 + (u * 8.0) as usize, 19);
        assert_eq!(fb.get(u, v), c);
    }

    #[test]
    fn test_get_truncates_texel_coordinates() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(0, 0, Color::rgb(255, 0, 0));

        // Anywhere inside the first texel cell maps to texel (0, 0)
        assert_eq!(fb.get(0.0, 0.0), Color::rgb(255, 0, 0));
        assert_eq!(fb.get(0.24, 0.24), Color::rgb(255, 0, 0));
    }

    #[test]
    #[should_panic]
    fn test_passthrough_out_of_range_panics() {
        let fb = Framebuffer::new(4, 4).unwrap();
        let _ = fb.get(2.0, 2.0);
    }

    #[test]
    fn test_clamp_pins_to_edges() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(0, 0, Color::rgb(1, 0, 0));
        fb.set_pixel(3, 3, Color::rgb(0, 1, 0));
        fb.set_address_mode(AddressMode::Clamp);

        assert_eq!(fb.get(-2.0, -2.0), Color::rgb(1, 0, 0));
        assert_eq!(fb.get(5.0, 5.0), Color::rgb(0, 1, 0));
    }

    #[test]
    fn test_wrap_tiles_by_fraction() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(1, 0, Color::rgb(7, 7, 7));
        fb.set_pixel(3, 0, Color::rgb(8, 8, 8));
        fb.set_address_mode(AddressMode::Wrap);

        // u = 1.25 tiles to texel column 1
        assert_eq!(fb.get(1.25, 0.0), Color::rgb(7, 7, 7));
        // u = -0.25 tiles to texel column 3
        assert_eq!(fb.get(-0.25, 0.0), Color::rgb(8, 8, 8));
    }

    #[test]
    fn test_wrap_tiles_negative_fractional_coordinates() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(2, 0, Color::rgb(5, 5, 5));
        fb.set_pixel(0, 2, Color::rgb(6, 6, 6));
        fb.set_address_mode(AddressMode::Wrap);

        // u = -0.35 has fractional part 0.65: 0.65 * 4 lands in column 2,
        // one texel left of what plain truncation would give
        assert_eq!(fb.get(-0.35, 0.0), Color::rgb(5, 5, 5));
        // Same along v
        assert_eq!(fb.get(0.0, -0.35), Color::rgb(6, 6, 6));
    }

    #[test]
    fn test_default_mode_is_passthrough() {
        let fb = Framebuffer::new(4, 4).unwrap();
        assert_eq!(fb.address_mode(), AddressMode::Passthrough);
    }
}
