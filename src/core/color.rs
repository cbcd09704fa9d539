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

//! Packed 32-bit color with aliased channel, integer, and float views
//!
//! [`Color`] is a single 32-bit word that can be read three ways:
//! - as four 8-bit channels (R, G, B, A): the visible-pixel view
//! - as the packed integer itself: the storage/interchange view
//! - as an `f32` bit pattern: the depth-buffer view
//!
//! All three are reinterpretations of the same storage word, so writing
//! through any view immediately changes what the others read. Only one view
//! is semantically meaningful per instance, determined by which constructor
//! produced it.

/// A packed RGBA color occupying one 32-bit word
///
/// Channels are stored little-endian within the word: R is byte 0, G is
/// byte 1, B is byte 2, A is byte 3. The same word doubles as a depth
/// element when constructed with [`Color::from_depth`], in which case the
/// channel bytes are just the float's bit pattern and carry no color meaning.
///
/// # Examples
///
/// ```
/// use rastrix::core::Color;
///
/// let c = Color::new(10, 20, 30, 40);
/// assert_eq!(c.to_bits().to_le_bytes(), [10, 20, 30, 40]);
///
/// // Opaque constructor defaults A to 255
/// assert_eq!(Color::rgb(10, 20, 30).a(), 255);
///
/// // Depth view round-trips bitwise through the same storage
/// let d = Color::from_depth(0.5);
/// assert_eq!(d.depth(), 0.5);
/// assert_eq!(d.to_bits(), 0.5f32.to_bits());
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color(u32);

impl Color {
    /// Opaque white (255, 255, 255, 255)
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque black (0, 0, 0, 255)
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Depth element holding 0.0
    pub const DEPTH_ZERO: Color = Color::from_depth(0.0);

    /// Create a color from four channel bytes
    ///
    /// # Arguments
    ///
    /// * `r` - Red channel (0-255)
    /// * `g` - Green channel (0-255)
    /// * `b` - Blue channel (0-255)
    /// * `a` - Alpha channel (0-255)
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    /// Create an opaque color (alpha = 255)
    ///
    /// # Examples
    ///
    /// ```
    /// use rastrix::core::Color;
    ///
    /// assert_eq!(Color::rgb(10, 20, 30), Color::new(10, 20, 30, 255));
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a depth element from a float value
    ///
    /// The word becomes the float's bit pattern; the channel and integer
    /// views then read that pattern and are not meaningful as color.
    pub const fn from_depth(depth: f32) -> Self {
        Self(depth.to_bits())
    }

    /// Reinterpret a raw 32-bit word as a color
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The packed integer view of the storage word
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// The float view of the storage word
    ///
    /// Meaningful only for instances produced by [`Color::from_depth`] or
    /// written as depth elements.
    pub const fn depth(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Red channel (byte 0 of the word)
    #[inline(always)]
    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    /// Green channel (byte 1 of the word)
    #[inline(always)]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel (byte 2 of the word)
    #[inline(always)]
    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Alpha channel (byte 3 of the word)
    #[inline(always)]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Scale the R, G, B channels by a float factor, leaving A unchanged
    ///
    /// Each product is truncated toward zero and narrowed to its low 8 bits.
    /// There is no saturation: a product above 255 wraps, matching an 8-bit
    /// narrowing cast rather than a clamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastrix::core::Color;
    ///
    /// let c = Color::new(200, 100, 50, 255).scaled(0.5);
    /// assert_eq!((c.r(), c.g(), c.b(), c.a()), (100, 50, 25, 255));
    /// ```
    #[must_use]
    pub fn scaled(self, scale: f32) -> Self {
        Self::new(
            narrow(self.r() as f32 * scale),
            narrow(self.g() as f32 * scale),
            narrow(self.b() as f32 * scale),
            self.a(),
        )
    }

    /// Per-channel multiplicative tint, leaving A unchanged
    ///
    /// Each R, G, B channel is multiplied by the matching tint channel
    /// normalized to 0.0-1.0, then truncated like [`Color::scaled`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rastrix::core::Color;
    ///
    /// // A white tint is the identity
    /// let c = Color::new(200, 100, 50, 128).tinted(Color::WHITE);
    /// assert_eq!((c.r(), c.g(), c.b(), c.a()), (200, 100, 50, 128));
    /// ```
    #[must_use]
    pub fn tinted(self, tint: Color) -> Self {
        Self::new(
            narrow(self.r() as f32 * (tint.r() as f32 / 255.0)),
            narrow(self.g() as f32 * (tint.g() as f32 / 255.0)),
            narrow(self.b() as f32 * (tint.b() as f32 / 255.0)),
            self.a(),
        )
    }

    /// Alpha-composite `src` over `dest` with integer floor division
    ///
    /// R, G, B follow `(dest*(255-src.a) + src*src.a) / 255`. The alpha
    /// channel weights *both* terms by `src.a`, as `(dest.a*(255-src.a) +
    /// src.a*src.a) / 255`, which diverges from textbook alpha-over. That
    /// formula is this layer's defined, bit-reproducible output; do not
    /// substitute the conventional one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastrix::core::Color;
    ///
    /// let out = Color::blend(Color::WHITE, Color::new(0, 0, 0, 128));
    /// assert_eq!((out.r(), out.g(), out.b()), (127, 127, 127));
    /// assert_eq!(out.a(), 191); // (255*127 + 128*128) / 255
    /// ```
    #[must_use]
    pub fn blend(dest: Color, src: Color) -> Color {
        let sa = src.a() as u32;
        let da = 255 - sa;

        let mix = |d: u8, s: u8| ((d as u32 * da + s as u32 * sa) / 255) as u8;

        Color::new(
            mix(dest.r(), src.r()),
            mix(dest.g(), src.g()),
            mix(dest.b(), src.b()),
            ((dest.a() as u32 * da + sa * sa) / 255) as u8,
        )
    }
}

/// Conversion from an externally-decoded RGBA pixel (R, G, B, A byte order)
impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_bits()
    }
}

/// Truncate toward zero and keep the low 8 bits
///
/// `as u8` straight from a float saturates, so the narrowing goes through a
/// wide integer to get wrapping 8-bit semantics instead.
#[inline(always)]
fn narrow(value: f32) -> u8 {
    value as i64 as u8
}

#[cfg(test)]
mod view_tests {
    use super::*;

    #[test]
    fn test_channel_byte_order() {
        let c = Color::new(10, 20, 30, 40);
        assert_eq!(c.r(), 10);
        assert_eq!(c.g(), 20);
        assert_eq!(c.b(), 30);
        assert_eq!(c.a(), 40);
        assert_eq!(c.to_bits().to_le_bytes(), [10, 20, 30, 40]);
    }

    #[test]
    fn test_opaque_default_alpha() {
        assert_eq!(Color::rgb(10, 20, 30).a(), 255);
        assert_eq!(Color::rgb(10, 20, 30), Color::new(10, 20, 30, 255));
    }

    #[test]
    fn test_constants() {
        assert_eq!(Color::WHITE, Color::new(255, 255, 255, 255));
        assert_eq!(Color::BLACK, Color::new(0, 0, 0, 255));
        assert_eq!(Color::DEPTH_ZERO.to_bits(), 0);
        assert_eq!(Color::DEPTH_ZERO.depth(), 0.0);
    }

    #[test]
    fn test_depth_view_aliases_storage() {
        let d = Color::from_depth(1.0);
        // 1.0f32 is 0x3F800000: channels read that bit pattern
        assert_eq!(d.to_bits(), 0x3F80_0000);
        assert_eq!(d.r(), 0x00);
        assert_eq!(d.g(), 0x00);
        assert_eq!(d.b(), 0x80);
        assert_eq!(d.a(), 0x3F);
    }

    #[test]
    fn test_from_decoded_pixel() {
        let c = Color::from([1u8, 2, 3, 4]);
        assert_eq!(c, Color::new(1, 2, 3, 4));
    }

    #[test]
    fn test_into_packed_word() {
        // Black is (0, 0, 0, 255): only the alpha byte set
        assert_eq!(u32::from(Color::BLACK), 0xFF00_0000);
    }

    #[test]
    fn test_pod_size_and_layout() {
        assert_eq!(std::mem::size_of::<Color>(), 4);
        let c = Color::new(10, 20, 30, 40);
        let bytes: &[u8] = bytemuck::bytes_of(&c);
        assert_eq!(bytes, &[10, 20, 30, 40]);
    }
}

#[cfg(test)]
mod scale_tests {
    use super::*;

    #[test]
    fn test_scaled_truncates_toward_zero() {
        let c = Color::new(200, 100, 50, 255).scaled(0.5);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (100, 50, 25, 255));

        // 0.999 * 255 = 254.745 truncates to 254
        let c = Color::new(255, 0, 0, 255).scaled(0.999);
        assert_eq!(c.r(), 254);
    }

    #[test]
    fn test_scaled_wraps_past_255() {
        // 200 * 2.0 = 400 -> low 8 bits = 144, no saturation
        let c = Color::new(200, 0, 0, 255).scaled(2.0);
        assert_eq!(c.r(), 144);
    }

    #[test]
    fn test_scaled_leaves_alpha() {
        let c = Color::new(100, 100, 100, 37).scaled(3.0);
        assert_eq!(c.a(), 37);
    }

    #[test]
    fn test_tinted_white_is_identity() {
        let c = Color::new(200, 100, 50, 128);
        assert_eq!(c.tinted(Color::WHITE), c);
    }

    #[test]
    fn test_tinted_half_gray() {
        // tint channel 127 -> factor 127/255, truncated products
        let c = Color::new(200, 100, 50, 255).tinted(Color::rgb(127, 127, 127));
        assert_eq!(c.r(), (200.0 * (127.0 / 255.0)) as u8); // 99
        assert_eq!(c.g(), 49);
        assert_eq!(c.b(), 24);
        assert_eq!(c.a(), 255);
    }

    #[test]
    fn test_tinted_black_zeroes_rgb() {
        let c = Color::new(200, 100, 50, 90).tinted(Color::BLACK);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0, 0, 0, 90));
    }
}
