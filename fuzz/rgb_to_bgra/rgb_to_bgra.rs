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

use frame_transcode::{rgb_to_bgra8888, AlphaPolicy, PixelImage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, bool, u8, bool)| {
    fuzz_packed(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_packed(i_width: u8, i_height: u8, src_rgba: bool, padding: u8, require_alpha: bool) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let src_chans = if src_rgba { 4 } else { 3 };
    let stride = src_chans * i_width as usize + padding as usize;
    let src_data = vec![126u8; stride * i_height as usize];
    let image = PixelImage::with_stride(
        &src_data,
        stride as u32,
        i_width as u32,
        i_height as u32,
        src_chans,
    );
    let policy = if require_alpha {
        AlphaPolicy::Require
    } else {
        AlphaPolicy::Expand
    };

    match rgb_to_bgra8888(&image, policy) {
        Ok(packed) => {
            assert_eq!(packed.stride as usize, 4 * i_width as usize + padding as usize);
            assert_eq!(packed.data.len(), packed.stride as usize * i_height as usize);
        }
        Err(err) => {
            assert!(require_alpha && !src_rgba, "unexpected {err}");
        }
    }
}
