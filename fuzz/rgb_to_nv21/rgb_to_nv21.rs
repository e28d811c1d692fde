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

use frame_transcode::{rgb_to_nv21, ChromaEdgePolicy, PixelImage, Traversal};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u8, u8, bool)| {
    fuzz_nv21(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_nv21(i_width: u8, i_height: u8, i_channels: u8, value: u8, skip_trailing: bool) {
    let channels = (i_channels % 5) as usize;
    let width = i_width as usize;
    let height = i_height as usize;
    let src = vec![value; width * height * channels];
    let image = PixelImage::new(&src, i_width as u32, i_height as u32, channels);
    let policy = if skip_trailing {
        ChromaEdgePolicy::SkipTrailing
    } else {
        ChromaEdgePolicy::Strict
    };

    for traversal in [Traversal::Identity, Traversal::Rotated90] {
        if let Ok(nv21) = rgb_to_nv21(&image, traversal, policy) {
            assert_eq!(nv21.len(), width * height + (width / 2) * (height / 2) * 2);
        }
    }
}
