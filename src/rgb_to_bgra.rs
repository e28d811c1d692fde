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
use crate::images::{PackedImage, PixelImage};
use crate::transcode_error::{check_overflow_v2, TranscodeError};
use crate::validation::{check_alpha, check_source_image};
use crate::yuv_support::{AlphaPolicy, PixelLayout, SourceChannels, OPAQUE_ALPHA};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

fn shuffle_row<const SRC: u8, const DST: u8>(src: &[u8], dst: &mut [u8]) {
    let src_channels: PixelLayout = SRC.into();
    let dst_channels: PixelLayout = DST.into();
    for (dst, src) in dst
        .chunks_exact_mut(dst_channels.get_channels_count())
        .zip(src.chunks_exact(src_channels.get_channels_count()))
    {
        dst[dst_channels.get_r_channel_offset()] = src[src_channels.get_r_channel_offset()];
        dst[dst_channels.get_g_channel_offset()] = src[src_channels.get_g_channel_offset()];
        dst[dst_channels.get_b_channel_offset()] = src[src_channels.get_b_channel_offset()];
        let a = if src_channels.has_alpha() {
            src[src_channels.get_a_channel_offset()]
        } else {
            OPAQUE_ALPHA
        };
        dst[dst_channels.get_a_channel_offset()] = a;
    }
}

/// Channel reshuffling into BGRA, row by row, padding is left zeroed
fn shuffle_impl<const SRC: u8>(image: &PixelImage, dst: &mut [u8], dst_stride: usize) {
    let src_channels: PixelLayout = SRC.into();
    let width = image.width as usize;
    let src_row_len = src_channels.get_channels_count() * width;
    let dst_row_len = PixelLayout::Bgra.get_channels_count() * width;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(dst_stride)
            .zip(image.pixels.par_chunks_exact(image.stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(dst_stride)
            .zip(image.pixels.chunks_exact(image.stride as usize));
    }
    iter.for_each(|(dst, src)| {
        shuffle_row::<SRC, { PixelLayout::Bgra as u8 }>(
            &src[0..src_row_len],
            &mut dst[0..dst_row_len],
        );
    });
}

/// Converts a decoded RGB or RGBA still into packed BGRA8888.
///
/// Each output row is `width * 4` bytes of blue, green, red, alpha followed by as many
/// zeroed padding bytes as the source row carried, so the returned stride is
/// `width * 4 + (image.stride - width * channels)`.
///
/// # Arguments
///
/// * `image`: Source image, 3 or 4 channels
/// * `alpha_policy`: Whether a source without alpha is expanded with opaque alpha or rejected
///
/// returns: Result<PackedImage, TranscodeError>
///
pub fn rgb_to_bgra8888(
    image: &PixelImage,
    alpha_policy: AlphaPolicy,
) -> Result<PackedImage, TranscodeError> {
    let source = check_source_image(image)?;
    check_alpha(source, alpha_policy)?;

    let dst_row_len = check_overflow_v2(
        image.width as usize,
        PixelLayout::Bgra.get_channels_count(),
    )?;
    let dst_stride = dst_row_len
        .checked_add(image.row_padding())
        .ok_or(TranscodeError::PointerOverflow)?;
    let stride = u32::try_from(dst_stride).map_err(|_| TranscodeError::PointerOverflow)?;
    let total_len = check_overflow_v2(dst_stride, image.height as usize)?;

    let mut dst = vec![0u8; total_len];
    match source {
        SourceChannels::Rgb => {
            shuffle_impl::<{ PixelLayout::Rgb as u8 }>(image, &mut dst, dst_stride)
        }
        SourceChannels::Rgba => {
            shuffle_impl::<{ PixelLayout::Rgba as u8 }>(image, &mut dst, dst_stride)
        }
    }

    Ok(PackedImage {
        data: dst,
        stride,
        width: image.width,
        height: image.height,
    })
}
