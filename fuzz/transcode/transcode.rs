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

#![no_main]

use frame_transcode::{
    transcode, ChromaEdgePolicy, PixelImage, Rotation, RotationStrategy, TranscodeOptions,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u8, u8, bool, bool, bool)| {
    let (i_width, i_height, i_channels, value, bgra, rotate, traverse) = data;
    let channels = (i_channels % 6) as usize;
    let pixels = vec![value; i_width as usize * i_height as usize * channels];
    let image = PixelImage::new(&pixels, i_width as u32, i_height as u32, channels);
    let base = if bgra {
        TranscodeOptions::bgra8888()
    } else {
        TranscodeOptions::nv21()
    };
    let options = base
        .with_rotation(if rotate {
            Rotation::Ccw90
        } else {
            Rotation::Identity
        })
        .with_strategy(if traverse {
            RotationStrategy::Traverse
        } else {
            RotationStrategy::Describe
        })
        .with_edge_policy(ChromaEdgePolicy::SkipTrailing);

    if let Ok(frame) = transcode(&image, &options) {
        assert_eq!(frame.metadata.width, i_width as u32);
        assert_eq!(frame.metadata.height, i_height as u32);
    }
});
