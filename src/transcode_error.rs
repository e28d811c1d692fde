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
use crate::yuv_support::PixelFormat;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    ZeroBaseSize,
    PointerOverflow,
    UnsupportedChannels(usize),
    StrideTooSmall(MismatchedSize),
    BufferSizeMismatch(MismatchedSize),
    OddDimensions { width: u32, height: u32 },
    TooSmallForSubsampling { width: u32, height: u32 },
    MissingAlpha,
    UnsupportedTraversal(PixelFormat),
}

impl Display for TranscodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscodeError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            TranscodeError::PointerOverflow => {
                f.write_str("Image size overflow pointer capabilities")
            }
            TranscodeError::UnsupportedChannels(channels) => f.write_fmt(format_args!(
                "Source must have 3 or 4 channels, but it has {}",
                channels
            )),
            TranscodeError::StrideTooSmall(size) => f.write_fmt(format_args!(
                "Source stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            TranscodeError::BufferSizeMismatch(size) => f.write_fmt(format_args!(
                "Source buffer size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            TranscodeError::OddDimensions { width, height } => f.write_fmt(format_args!(
                "4:2:0 subsampling requires even dimensions, but image is {}x{}",
                width, height
            )),
            TranscodeError::TooSmallForSubsampling { width, height } => f.write_fmt(format_args!(
                "4:2:0 subsampling requires at least one 2x2 block, but image is {}x{}",
                width, height
            )),
            TranscodeError::MissingAlpha => {
                f.write_str("Source has no alpha channel and alpha expansion was not requested")
            }
            TranscodeError::UnsupportedTraversal(format) => f.write_fmt(format_args!(
                "{} can't be reordered by traversal, describe the rotation instead",
                format
            )),
        }
    }
}

impl Error for TranscodeError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, TranscodeError> {
    v0.checked_mul(v1).ok_or(TranscodeError::PointerOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_detection() {
        assert_eq!(check_overflow_v2(4, 5), Ok(20));
        assert_eq!(
            check_overflow_v2(usize::MAX, 2),
            Err(TranscodeError::PointerOverflow)
        );
    }

    #[test]
    fn test_messages_name_the_failed_check() {
        let err = TranscodeError::BufferSizeMismatch(MismatchedSize {
            expected: 48,
            received: 47,
        });
        assert_eq!(
            err.to_string(),
            "Source buffer size mismatch: expected=48, received=47"
        );
        assert!(TranscodeError::UnsupportedChannels(2)
            .to_string()
            .contains("has 2"));
        assert!(TranscodeError::UnsupportedTraversal(PixelFormat::Bgra8888)
            .to_string()
            .starts_with("BGRA8888"));
    }
}
