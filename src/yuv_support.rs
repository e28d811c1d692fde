/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Fixed BT.601 limited range coefficients and the channel layouts the transcoder understands.

/// Fixed point precision of the forward transform, in bits.
pub const PRECISION: i32 = 8;
/// Rounding bias added before the descaling shift, `1 << (PRECISION - 1)`.
pub const ROUNDING: i32 = 1 << (PRECISION - 1);
/// Luma offset of limited range, Y ∈ [16, 235].
pub const LUMA_OFFSET: i32 = 16;
/// Chroma zero point, Cb/Cr ∈ [16, 240] centered at 128.
pub const CHROMA_OFFSET: i32 = 128;

/// Red weight of luma.
pub const Y_R: i32 = 66;
/// Green weight of luma.
pub const Y_G: i32 = 129;
/// Blue weight of luma.
pub const Y_B: i32 = 25;

/// Red weight of U (Cb).
pub const U_R: i32 = -38;
/// Green weight of U (Cb).
pub const U_G: i32 = -74;
/// Blue weight of U (Cb).
pub const U_B: i32 = 112;

/// Red weight of V (Cr).
pub const V_R: i32 = 112;
/// Green weight of V (Cr).
pub const V_G: i32 = -94;
/// Blue weight of V (Cr).
pub const V_B: i32 = -18;

/// Alpha written when a source without alpha is expanded to four channels.
pub const OPAQUE_ALPHA: u8 = 255;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Interleaved 8 bit channel layouts
pub enum PixelLayout {
    Rgb = 0,
    Rgba = 1,
    Bgra = 2,
}

impl From<u8> for PixelLayout {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PixelLayout::Rgb,
            1 => PixelLayout::Rgba,
            2 => PixelLayout::Bgra,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl PixelLayout {
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba | PixelLayout::Bgra => 4,
        }
    }

    #[inline(always)]
    pub const fn has_alpha(&self) -> bool {
        match self {
            PixelLayout::Rgb => false,
            PixelLayout::Rgba | PixelLayout::Bgra => true,
        }
    }

    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            PixelLayout::Rgb | PixelLayout::Rgba => 0,
            PixelLayout::Bgra => 2,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            PixelLayout::Rgb | PixelLayout::Rgba => 2,
            PixelLayout::Bgra => 0,
        }
    }

    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        match self {
            PixelLayout::Rgb => 0,
            PixelLayout::Rgba | PixelLayout::Bgra => 3,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Channel order of a decoded still, decoders hand over RGB or RGBA only
pub enum SourceChannels {
    Rgb,
    Rgba,
}

impl SourceChannels {
    /// Maps a decoded source channel count onto its channel order.
    #[inline]
    pub const fn from_channels_count(channels: usize) -> Option<SourceChannels> {
        match channels {
            3 => Some(SourceChannels::Rgb),
            4 => Some(SourceChannels::Rgba),
            _ => None,
        }
    }

    #[inline]
    pub const fn layout(&self) -> PixelLayout {
        match self {
            SourceChannels::Rgb => PixelLayout::Rgb,
            SourceChannels::Rgba => PixelLayout::Rgba,
        }
    }

    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.layout().has_alpha()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// How a packed encoder treats a source without alpha
pub enum AlphaPolicy {
    /// Append an opaque alpha byte to every pixel
    #[default]
    Expand,
    /// Refuse sources without alpha
    Require,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Encoded pixel format tag handed to the detector together with the bytes
pub enum PixelFormat {
    /// Y plane followed by an interleaved VU plane, 4:2:0
    #[default]
    Nv21,
    /// Packed blue, green, red, alpha, 4 bytes per pixel
    Bgra8888,
}

impl PixelFormat {
    pub const fn name(&self) -> &'static str {
        match self {
            PixelFormat::Nv21 => "NV21",
            PixelFormat::Bgra8888 => "BGRA8888",
        }
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Rotation the consumer must apply to view the frame upright
pub enum Rotation {
    #[default]
    Identity,
    /// Frame must be turned 90° counter-clockwise
    Ccw90,
}

impl Rotation {
    /// Rotation in degrees as most detector APIs expect it.
    pub const fn degrees(&self) -> u32 {
        match self {
            Rotation::Identity => 0,
            Rotation::Ccw90 => 90,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_matches_precision() {
        assert_eq!(ROUNDING, 128);
        assert_eq!(1 << PRECISION, 256);
    }

    #[test]
    fn test_luma_weights_sum_to_limited_range() {
        assert_eq!(Y_R + Y_G + Y_B, 220);
        assert_eq!(U_R + U_G + U_B, 0);
        assert_eq!(V_R + V_G + V_B, 0);
    }

    #[test]
    fn test_layout_offsets() {
        let bgra = PixelLayout::Bgra;
        assert_eq!(bgra.get_b_channel_offset(), 0);
        assert_eq!(bgra.get_g_channel_offset(), 1);
        assert_eq!(bgra.get_r_channel_offset(), 2);
        assert_eq!(bgra.get_a_channel_offset(), 3);
        assert!(!PixelLayout::Rgb.has_alpha());
    }

    #[test]
    fn test_source_channels_never_map_to_bgra() {
        for channels in 0..16 {
            let Some(source) = SourceChannels::from_channels_count(channels) else {
                assert!(channels != 3 && channels != 4);
                continue;
            };
            assert_ne!(source.layout(), PixelLayout::Bgra);
            assert_eq!(source.layout().get_channels_count(), channels);
        }
        assert_eq!(SourceChannels::from_channels_count(3), Some(SourceChannels::Rgb));
        assert_eq!(SourceChannels::from_channels_count(4), Some(SourceChannels::Rgba));
        assert!(!SourceChannels::Rgb.has_alpha());
        assert!(SourceChannels::Rgba.has_alpha());
    }

    #[test]
    fn test_layout_round_trips_through_u8() {
        for layout in [PixelLayout::Rgb, PixelLayout::Rgba, PixelLayout::Bgra] {
            assert_eq!(PixelLayout::from(layout as u8), layout);
        }
    }

    #[test]
    fn test_rotation_degrees() {
        assert_eq!(Rotation::default().degrees(), 0);
        assert_eq!(Rotation::Ccw90.degrees(), 90);
    }
}
