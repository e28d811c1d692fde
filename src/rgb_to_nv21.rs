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
use crate::chroma_planner::{ChromaEdgePolicy, ChromaPlanner, Traversal};
use crate::images::PixelImage;
use crate::transcode_error::{check_overflow_v2, TranscodeError};
use crate::validation::{check_source_image, check_subsampling};
use crate::ycbcr_kernel::{rgb_to_chroma, rgb_to_luma};
use crate::yuv_support::{PixelLayout, SourceChannels};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

fn rgbx_to_nv21<const ORIGIN_CHANNELS: u8>(
    image: &PixelImage,
    planner: &ChromaPlanner,
    dst: &mut [u8],
) {
    let src_chans: PixelLayout = ORIGIN_CHANNELS.into();
    let channels = src_chans.get_channels_count();
    let traversal = planner.traversal();
    let steps = planner.steps();
    let lines = planner.lines();
    let height = image.height as usize;
    let src_stride = image.stride as usize;
    let src = image.pixels;

    let (y_plane, vu_plane) = dst.split_at_mut(lines * steps);

    let fetch = |line: usize, step: usize| {
        let (row, col) = traversal.source_position(line, step, height);
        let px = &src[row * src_stride + col * channels..];
        (
            px[src_chans.get_r_channel_offset()],
            px[src_chans.get_g_channel_offset()],
            px[src_chans.get_b_channel_offset()],
        )
    };

    let process_luma_line = |line: usize, y_dst: &mut [u8]| {
        for (step, y) in y_dst.iter_mut().enumerate() {
            let (r, g, b) = fetch(line, step);
            *y = rgb_to_luma(r, g, b);
        }
    };

    let process_double_line = |line: usize, y_dst: &mut [u8], vu_dst: &mut [u8]| {
        let (y_dst0, y_dst1) = y_dst.split_at_mut(steps);
        let mut vu_cursor = vu_dst.chunks_exact_mut(2);
        for (step, y) in y_dst0.iter_mut().enumerate() {
            let (r, g, b) = fetch(line, step);
            *y = rgb_to_luma(r, g, b);
            if planner.emits_chroma(line, step) {
                if let Some(vu) = vu_cursor.next() {
                    let chroma = rgb_to_chroma(r, g, b);
                    vu[0] = chroma.v;
                    vu[1] = chroma.u;
                }
            }
        }
        process_luma_line(line + 1, y_dst1);
    };

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = y_plane
            .par_chunks_exact_mut(steps * 2)
            .zip(vu_plane.par_chunks_exact_mut(planner.chroma_row_len()))
            .enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = y_plane
            .chunks_exact_mut(steps * 2)
            .zip(vu_plane.chunks_exact_mut(planner.chroma_row_len()))
            .enumerate();
    }
    iter.for_each(|(pair, (y_dst, vu_dst))| {
        process_double_line(pair * 2, y_dst, vu_dst);
    });

    if lines & 1 != 0 {
        let y_dst = y_plane.chunks_exact_mut(steps * 2).into_remainder();
        process_luma_line(lines - 1, y_dst);
    }
}

/// Converts a decoded RGB or RGBA still into NV21.
///
/// The result is a single buffer holding the Y plane, one byte per pixel in `traversal`
/// order, followed by the chroma plane with one V, U pair per 2x2 block. Chroma is point
/// sampled from the pixel the [ChromaPlanner] picks, alpha of RGBA sources is ignored.
///
/// With [Traversal::Rotated90] the byte order is that of the frame turned a quarter,
/// the buffer length is unchanged.
///
/// # Arguments
///
/// * `image`: Source image, 3 or 4 channels
/// * `traversal`: Order the source is walked in
/// * `edge_policy`: Handling of odd width or height, see [ChromaEdgePolicy]
///
/// returns: Result<Vec<u8>, TranscodeError>
///
pub fn rgb_to_nv21(
    image: &PixelImage,
    traversal: Traversal,
    edge_policy: ChromaEdgePolicy,
) -> Result<Vec<u8>, TranscodeError> {
    let source = check_source_image(image)?;
    check_subsampling(image.width, image.height, edge_policy)?;

    let planner = ChromaPlanner::new(traversal, image.width as usize, image.height as usize);
    let luma_len = check_overflow_v2(image.width as usize, image.height as usize)?;
    let total_len = luma_len
        .checked_add(planner.chroma_len())
        .ok_or(TranscodeError::PointerOverflow)?;

    if image.width & 1 != 0 || image.height & 1 != 0 {
        log::warn!(
            "{}x{} frame has a trailing line without chroma, encoding it as luma only",
            image.width,
            image.height
        );
    }

    let mut dst = vec![0u8; total_len];
    match source {
        SourceChannels::Rgb => {
            rgbx_to_nv21::<{ PixelLayout::Rgb as u8 }>(image, &planner, &mut dst)
        }
        SourceChannels::Rgba => {
            rgbx_to_nv21::<{ PixelLayout::Rgba as u8 }>(image, &planner, &mut dst)
        }
    }
    Ok(dst)
}
