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
//! Transcodes decoded camera stills into the pixel formats barcode detectors consume.
//!
//! Two encodings are produced from an RGB or RGBA [PixelImage]:
//!
//! * NV21, a luma plane followed by an interleaved V, U plane subsampled 4:2:0, see [rgb_to_nv21];
//! * BGRA8888, packed blue, green, red, alpha with an explicit row stride, see [rgb_to_bgra8888].
//!
//! Colors are converted with fixed point BT.601 limited range coefficients, see [rgb_to_luma]
//! and [rgb_to_chroma]. Frames captured a quarter turn off can either carry the rotation as
//! metadata or be written in rotated order, see [Traversal] and [RotationStrategy].
//! [transcode] ties everything together and returns the bytes with their [FrameMetadata].
mod chroma_planner;
mod images;
mod numerics;
mod rgb_to_bgra;
mod rgb_to_nv21;
mod transcode_error;
mod transcoder;
mod validation;
mod ycbcr_kernel;
mod yuv_support;

pub use chroma_planner::{luma_index, ChromaEdgePolicy, ChromaPlanner, Traversal};
pub use images::{EncodedFrame, FrameMetadata, PackedImage, PixelImage};
pub use rgb_to_bgra::rgb_to_bgra8888;
pub use rgb_to_nv21::rgb_to_nv21;
pub use transcode_error::{MismatchedSize, TranscodeError};
pub use transcoder::{transcode, RotationStrategy, TranscodeOptions};
pub use validation::{check_alpha, check_source_image, check_subsampling};
pub use ycbcr_kernel::{rgb_to_chroma, rgb_to_luma, Chroma};
pub use yuv_support::{
    AlphaPolicy, PixelFormat, PixelLayout, Rotation, SourceChannels, CHROMA_OFFSET, LUMA_OFFSET,
    OPAQUE_ALPHA, PRECISION, ROUNDING, U_B, U_G, U_R, V_B, V_G, V_R, Y_B, Y_G, Y_R,
};
