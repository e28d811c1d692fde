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
//! Precondition checks run before either encoder touches a pixel.
use crate::chroma_planner::ChromaEdgePolicy;
use crate::images::PixelImage;
use crate::transcode_error::{check_overflow_v2, MismatchedSize, TranscodeError};
use crate::yuv_support::{AlphaPolicy, SourceChannels};

/// Validates dimensions, channel count, stride and buffer length of a source image.
///
/// Returns the channel order the source is read with.
pub fn check_source_image(image: &PixelImage) -> Result<SourceChannels, TranscodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(TranscodeError::ZeroBaseSize);
    }
    let source = SourceChannels::from_channels_count(image.channels)
        .ok_or(TranscodeError::UnsupportedChannels(image.channels))?;
    let row_len = check_overflow_v2(image.width as usize, image.channels)?;
    if (image.stride as usize) < row_len {
        return Err(TranscodeError::StrideTooSmall(MismatchedSize {
            expected: row_len,
            received: image.stride as usize,
        }));
    }
    let expected = check_overflow_v2(image.stride as usize, image.height as usize)?;
    if image.pixels.len() != expected {
        return Err(TranscodeError::BufferSizeMismatch(MismatchedSize {
            expected,
            received: image.pixels.len(),
        }));
    }
    Ok(source)
}

/// Checks that a `width` x `height` frame can be 4:2:0 subsampled under `policy`.
pub fn check_subsampling(
    width: u32,
    height: u32,
    policy: ChromaEdgePolicy,
) -> Result<(), TranscodeError> {
    if width < 2 || height < 2 {
        return Err(TranscodeError::TooSmallForSubsampling { width, height });
    }
    if policy == ChromaEdgePolicy::Strict && (width & 1 != 0 || height & 1 != 0) {
        return Err(TranscodeError::OddDimensions { width, height });
    }
    Ok(())
}

/// Checks that a packed destination can get its alpha from `source` under `policy`.
pub fn check_alpha(source: SourceChannels, policy: AlphaPolicy) -> Result<(), TranscodeError> {
    if !source.has_alpha() && policy == AlphaPolicy::Require {
        return Err(TranscodeError::MissingAlpha);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_tight_rgb_and_rgba() {
        let rgb = vec![0u8; 4 * 2 * 3];
        let rgba = vec![0u8; 4 * 2 * 4];
        assert_eq!(
            check_source_image(&PixelImage::new(&rgb, 4, 2, 3)),
            Ok(SourceChannels::Rgb)
        );
        assert_eq!(
            check_source_image(&PixelImage::new(&rgba, 4, 2, 4)),
            Ok(SourceChannels::Rgba)
        );
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let empty: [u8; 0] = [];
        assert_eq!(
            check_source_image(&PixelImage::new(&empty, 0, 4, 3)),
            Err(TranscodeError::ZeroBaseSize)
        );
        assert_eq!(
            check_source_image(&PixelImage::new(&empty, 4, 0, 3)),
            Err(TranscodeError::ZeroBaseSize)
        );
    }

    #[test]
    fn test_rejects_unsupported_channels() {
        let gray = vec![0u8; 16];
        assert_eq!(
            check_source_image(&PixelImage::new(&gray, 4, 4, 1)),
            Err(TranscodeError::UnsupportedChannels(1))
        );
        let two = vec![0u8; 32];
        assert_eq!(
            check_source_image(&PixelImage::new(&two, 4, 4, 2)),
            Err(TranscodeError::UnsupportedChannels(2))
        );
    }

    #[test]
    fn test_rejects_length_mismatch_without_truncating() {
        let short = vec![0u8; 4 * 4 * 3 - 1];
        assert_eq!(
            check_source_image(&PixelImage::new(&short, 4, 4, 3)),
            Err(TranscodeError::BufferSizeMismatch(MismatchedSize {
                expected: 48,
                received: 47,
            }))
        );
        let long = vec![0u8; 4 * 4 * 3 + 3];
        assert!(matches!(
            check_source_image(&PixelImage::new(&long, 4, 4, 3)),
            Err(TranscodeError::BufferSizeMismatch(_))
        ));
    }

    #[test]
    fn test_stride_must_cover_a_row() {
        let pixels = vec![0u8; 10 * 2];
        assert_eq!(
            check_source_image(&PixelImage::with_stride(&pixels, 10, 4, 2, 3)),
            Err(TranscodeError::StrideTooSmall(MismatchedSize {
                expected: 12,
                received: 10,
            }))
        );
        let padded = vec![0u8; 16 * 2];
        assert_eq!(
            check_source_image(&PixelImage::with_stride(&padded, 16, 4, 2, 3)),
            Ok(SourceChannels::Rgb)
        );
    }

    #[test]
    fn test_subsampling_preconditions() {
        assert_eq!(check_subsampling(4, 2, ChromaEdgePolicy::Strict), Ok(()));
        assert_eq!(
            check_subsampling(5, 4, ChromaEdgePolicy::Strict),
            Err(TranscodeError::OddDimensions {
                width: 5,
                height: 4
            })
        );
        assert_eq!(check_subsampling(5, 3, ChromaEdgePolicy::SkipTrailing), Ok(()));
        assert_eq!(
            check_subsampling(1, 4, ChromaEdgePolicy::SkipTrailing),
            Err(TranscodeError::TooSmallForSubsampling {
                width: 1,
                height: 4
            })
        );
    }

    #[test]
    fn test_alpha_policy() {
        assert_eq!(check_alpha(SourceChannels::Rgba, AlphaPolicy::Require), Ok(()));
        assert_eq!(check_alpha(SourceChannels::Rgb, AlphaPolicy::Expand), Ok(()));
        assert_eq!(
            check_alpha(SourceChannels::Rgb, AlphaPolicy::Require),
            Err(TranscodeError::MissingAlpha)
        );
    }
}
