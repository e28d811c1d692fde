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
use crate::chroma_planner::Traversal;
use crate::yuv_support::{PixelFormat, Rotation};

#[derive(Debug, Copy, Clone)]
/// Decoded still as handed over by the capture layer
pub struct PixelImage<'a> {
    /// Row major samples, 3 (RGB) or 4 (RGBA) bytes per pixel.
    pub pixels: &'a [u8],
    /// Stride here always means bytes per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
    pub channels: usize,
}

impl<'a> PixelImage<'a> {
    /// Tightly packed image, stride is `width * channels`.
    pub fn new(pixels: &'a [u8], width: u32, height: u32, channels: usize) -> Self {
        PixelImage {
            pixels,
            stride: width.saturating_mul(channels as u32),
            width,
            height,
            channels,
        }
    }

    /// Image whose rows are padded up to `stride` bytes.
    pub fn with_stride(
        pixels: &'a [u8],
        stride: u32,
        width: u32,
        height: u32,
        channels: usize,
    ) -> Self {
        PixelImage {
            pixels,
            stride,
            width,
            height,
            channels,
        }
    }

    /// Bytes of padding trailing each row.
    #[inline]
    pub fn row_padding(&self) -> usize {
        (self.stride as usize).saturating_sub(self.width as usize * self.channels)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Packed 4 bytes per pixel image with an explicit row stride
pub struct PackedImage {
    pub data: Vec<u8>,
    /// Stride here always means bytes per row, at least `width * 4`.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Everything the detector needs to interpret [EncodedFrame::data]
pub struct FrameMetadata {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Rotation the consumer still has to apply.
    pub rotation: Rotation,
    /// Order the samples were written in.
    pub traversal: Traversal,
    /// Bytes per row, for NV21 this is the luma row length in traversal order.
    pub stride: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transcoded frame, owned, created per captured still
pub struct EncodedFrame {
    pub data: Vec<u8>,
    pub metadata: FrameMetadata,
}

impl EncodedFrame {
    /// Length of the luma plane of an NV21 frame.
    #[inline]
    fn luma_len(&self) -> usize {
        self.metadata.width as usize * self.metadata.height as usize
    }

    /// Luma plane, `None` for packed formats.
    pub fn y_plane(&self) -> Option<&[u8]> {
        match self.metadata.format {
            PixelFormat::Nv21 => self.data.get(..self.luma_len()),
            PixelFormat::Bgra8888 => None,
        }
    }

    /// Interleaved V, U plane, `None` for packed formats.
    pub fn vu_plane(&self) -> Option<&[u8]> {
        match self.metadata.format {
            PixelFormat::Nv21 => self.data.get(self.luma_len()..),
            PixelFormat::Bgra8888 => None,
        }
    }

    /// Row `y` of a packed frame including its padding, `None` for NV21 or out of bounds.
    pub fn packed_row(&self, y: u32) -> Option<&[u8]> {
        if self.metadata.format != PixelFormat::Bgra8888 || y >= self.metadata.height {
            return None;
        }
        let stride = self.metadata.stride as usize;
        let start = y as usize * stride;
        self.data.get(start..start + stride)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(format: PixelFormat, data: Vec<u8>, stride: u32) -> EncodedFrame {
        EncodedFrame {
            data,
            metadata: FrameMetadata {
                width: 2,
                height: 2,
                format,
                rotation: Rotation::Identity,
                traversal: Traversal::Identity,
                stride,
            },
        }
    }

    #[test]
    fn test_nv21_planes_split_after_luma() {
        let encoded = frame(PixelFormat::Nv21, vec![1, 2, 3, 4, 5, 6], 2);
        assert_eq!(encoded.y_plane(), Some(&[1u8, 2, 3, 4][..]));
        assert_eq!(encoded.vu_plane(), Some(&[5u8, 6][..]));
        assert_eq!(encoded.packed_row(0), None);
        assert_eq!(encoded.into_bytes(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_packed_rows_include_padding() {
        let data: Vec<u8> = (0..20).collect();
        let encoded = frame(PixelFormat::Bgra8888, data, 10);
        assert_eq!(encoded.y_plane(), None);
        assert_eq!(encoded.packed_row(1), Some(&(10u8..20).collect::<Vec<_>>()[..]));
        assert_eq!(encoded.packed_row(2), None);
    }

    #[test]
    fn test_default_stride_is_tight() {
        let pixels = [0u8; 24];
        let image = PixelImage::new(&pixels, 2, 4, 3);
        assert_eq!(image.stride, 6);
        assert_eq!(image.row_padding(), 0);
        let padded = PixelImage::with_stride(&pixels, 8, 2, 3, 3);
        assert_eq!(padded.row_padding(), 2);
    }
}
