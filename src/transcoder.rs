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
//! Single entry point selecting the encoder and assembling frame metadata.
use crate::chroma_planner::{ChromaEdgePolicy, Traversal};
use crate::images::{EncodedFrame, FrameMetadata, PixelImage};
use crate::rgb_to_bgra::rgb_to_bgra8888;
use crate::rgb_to_nv21::rgb_to_nv21;
use crate::transcode_error::TranscodeError;
use crate::yuv_support::{AlphaPolicy, PixelFormat, Rotation};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// How a requested rotation reaches the consumer
pub enum RotationStrategy {
    /// Samples stay in source order, rotation travels as metadata
    #[default]
    Describe,
    /// Samples are written in rotated order, metadata reports no rotation left to apply
    Traverse,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Per frame transcoding configuration
pub struct TranscodeOptions {
    pub format: PixelFormat,
    pub rotation: Rotation,
    pub strategy: RotationStrategy,
    /// Only consulted for [PixelFormat::Bgra8888].
    pub alpha: AlphaPolicy,
    /// Only consulted for [PixelFormat::Nv21].
    pub edge: ChromaEdgePolicy,
}

impl TranscodeOptions {
    /// NV21, rotation described, odd dimensions rejected.
    pub const fn nv21() -> Self {
        TranscodeOptions {
            format: PixelFormat::Nv21,
            rotation: Rotation::Identity,
            strategy: RotationStrategy::Describe,
            alpha: AlphaPolicy::Expand,
            edge: ChromaEdgePolicy::Strict,
        }
    }

    /// BGRA8888, rotation described, RGB sources expanded with opaque alpha.
    pub const fn bgra8888() -> Self {
        TranscodeOptions {
            format: PixelFormat::Bgra8888,
            ..TranscodeOptions::nv21()
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_strategy(mut self, strategy: RotationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_alpha(mut self, alpha: AlphaPolicy) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_edge_policy(mut self, edge: ChromaEdgePolicy) -> Self {
        self.edge = edge;
        self
    }

    /// Traversal the encoder runs with and rotation left for the consumer.
    fn orientation(&self) -> Result<(Traversal, Rotation), TranscodeError> {
        match (self.strategy, self.rotation) {
            (RotationStrategy::Describe, rotation)
            | (RotationStrategy::Traverse, rotation @ Rotation::Identity) => {
                Ok((Traversal::Identity, rotation))
            }
            (RotationStrategy::Traverse, Rotation::Ccw90) => match self.format {
                PixelFormat::Nv21 => Ok((Traversal::Rotated90, Rotation::Identity)),
                PixelFormat::Bgra8888 => Err(TranscodeError::UnsupportedTraversal(self.format)),
            },
        }
    }
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        TranscodeOptions::nv21()
    }
}

/// Transcodes one decoded still for the detector.
///
/// Validation runs before any pixel is processed, every failure is reported as a
/// [TranscodeError] naming the check. Output width and height are always the source's,
/// rotation either travels in [FrameMetadata::rotation] or is baked into the sample order
/// reported by [FrameMetadata::traversal].
pub fn transcode(
    image: &PixelImage,
    options: &TranscodeOptions,
) -> Result<EncodedFrame, TranscodeError> {
    let (traversal, rotation) = options.orientation()?;

    let (data, stride) = match options.format {
        PixelFormat::Nv21 => {
            let data = rgb_to_nv21(image, traversal, options.edge)?;
            let (_, steps) = traversal.extents(image.width as usize, image.height as usize);
            (data, steps as u32)
        }
        PixelFormat::Bgra8888 => {
            let packed = rgb_to_bgra8888(image, options.alpha)?;
            (packed.data, packed.stride)
        }
    };

    log::debug!(
        "Transcoded {}x{} {}ch frame to {} ({} bytes, stride {}, {:?}, rotation {}°)",
        image.width,
        image.height,
        image.channels,
        options.format,
        data.len(),
        stride,
        traversal,
        rotation.degrees()
    );

    Ok(EncodedFrame {
        data,
        metadata: FrameMetadata {
            width: image.width,
            height: image.height,
            format: options.format,
            rotation,
            traversal,
            stride,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, px: &[u8]) -> Vec<u8> {
        px.repeat(width * height)
    }

    #[test]
    fn test_nv21_describe_keeps_identity_order() {
        let rgb = solid(4, 2, &[255, 0, 0]);
        let image = PixelImage::new(&rgb, 4, 2, 3);
        let options = TranscodeOptions::nv21().with_rotation(Rotation::Ccw90);
        let frame = transcode(&image, &options).unwrap();
        assert_eq!(frame.metadata.rotation, Rotation::Ccw90);
        assert_eq!(frame.metadata.traversal, Traversal::Identity);
        assert_eq!(frame.metadata.stride, 4);
        assert_eq!((frame.metadata.width, frame.metadata.height), (4, 2));
        assert_eq!(frame.data.len(), 12);
        assert_eq!(frame.y_plane().unwrap(), &[82u8; 8][..]);
        assert_eq!(frame.vu_plane().unwrap(), &[240u8, 90, 240, 90][..]);
    }

    #[test]
    fn test_nv21_traverse_bakes_rotation_into_order() {
        let rgb: Vec<u8> = (0..4 * 2 * 3).map(|v| (v * 9) as u8).collect();
        let image = PixelImage::new(&rgb, 4, 2, 3);
        let options = TranscodeOptions::nv21()
            .with_rotation(Rotation::Ccw90)
            .with_strategy(RotationStrategy::Traverse);
        let frame = transcode(&image, &options).unwrap();
        assert_eq!(frame.metadata.rotation, Rotation::Identity);
        assert_eq!(frame.metadata.traversal, Traversal::Rotated90);
        assert_eq!((frame.metadata.width, frame.metadata.height), (4, 2));
        assert_eq!(frame.metadata.stride, 2);
        assert_eq!(
            frame.data,
            rgb_to_nv21(&image, Traversal::Rotated90, ChromaEdgePolicy::Strict).unwrap()
        );
    }

    #[test]
    fn test_traverse_without_rotation_is_identity() {
        let rgb = solid(2, 2, &[1, 2, 3]);
        let image = PixelImage::new(&rgb, 2, 2, 3);
        let options = TranscodeOptions::bgra8888().with_strategy(RotationStrategy::Traverse);
        let frame = transcode(&image, &options).unwrap();
        assert_eq!(frame.metadata.traversal, Traversal::Identity);
        assert_eq!(frame.metadata.rotation, Rotation::Identity);
    }

    #[test]
    fn test_bgra_describes_rotation_and_reports_stride() {
        let rgba = solid(3, 2, &[10, 20, 30, 40]);
        let image = PixelImage::new(&rgba, 3, 2, 4);
        let options = TranscodeOptions::bgra8888().with_rotation(Rotation::Ccw90);
        let frame = transcode(&image, &options).unwrap();
        assert_eq!(frame.metadata.format, PixelFormat::Bgra8888);
        assert_eq!(frame.metadata.rotation, Rotation::Ccw90);
        assert_eq!(frame.metadata.stride, 12);
        assert_eq!(frame.packed_row(1).unwrap(), &[30u8, 20, 10, 40].repeat(3)[..]);
        assert!(frame.y_plane().is_none());
    }

    #[test]
    fn test_bgra_rejects_traversal() {
        let rgba = solid(2, 2, &[0, 0, 0, 0]);
        let image = PixelImage::new(&rgba, 2, 2, 4);
        let options = TranscodeOptions::bgra8888()
            .with_rotation(Rotation::Ccw90)
            .with_strategy(RotationStrategy::Traverse);
        assert_eq!(
            transcode(&image, &options),
            Err(TranscodeError::UnsupportedTraversal(PixelFormat::Bgra8888))
        );
    }

    #[test]
    fn test_options_reach_the_encoders() {
        let rgb = solid(5, 3, &[0, 0, 0]);
        let image = PixelImage::new(&rgb, 5, 3, 3);
        assert_eq!(
            transcode(&image, &TranscodeOptions::default()),
            Err(TranscodeError::OddDimensions {
                width: 5,
                height: 3
            })
        );
        let lenient = TranscodeOptions::nv21().with_edge_policy(ChromaEdgePolicy::SkipTrailing);
        assert_eq!(transcode(&image, &lenient).unwrap().data.len(), 15 + 4);

        let strict_alpha = TranscodeOptions::bgra8888().with_alpha(AlphaPolicy::Require);
        assert_eq!(
            transcode(&image, &strict_alpha),
            Err(TranscodeError::MissingAlpha)
        );
    }

    #[test]
    fn test_default_is_nv21() {
        assert_eq!(TranscodeOptions::default(), TranscodeOptions::nv21());
        assert_eq!(TranscodeOptions::default().format, PixelFormat::Nv21);
    }
}
