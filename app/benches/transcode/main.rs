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
use criterion::{criterion_group, criterion_main, Criterion};
use frame_transcode::{
    rgb_to_bgra8888, rgb_to_nv21, AlphaPolicy, ChromaEdgePolicy, PixelImage, Traversal,
};

fn synthetic_still(width: usize, height: usize, channels: usize) -> Vec<u8> {
    (0..width * height * channels)
        .map(|i| (i * 31 % 251) as u8)
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (1280usize, 960usize);
    let rgb = synthetic_still(width, height, 3);
    let rgba = synthetic_still(width, height, 4);
    let rgb_image = PixelImage::new(&rgb, width as u32, height as u32, 3);
    let rgba_image = PixelImage::new(&rgba, width as u32, height as u32, 4);

    c.bench_function("rgb_to_nv21 identity", |b| {
        b.iter(|| {
            rgb_to_nv21(&rgb_image, Traversal::Identity, ChromaEdgePolicy::Strict).unwrap();
        })
    });

    c.bench_function("rgb_to_nv21 rotated", |b| {
        b.iter(|| {
            rgb_to_nv21(&rgb_image, Traversal::Rotated90, ChromaEdgePolicy::Strict).unwrap();
        })
    });

    c.bench_function("rgb_to_bgra8888", |b| {
        b.iter(|| {
            rgb_to_bgra8888(&rgb_image, AlphaPolicy::Expand).unwrap();
        })
    });

    c.bench_function("rgba_to_bgra8888", |b| {
        b.iter(|| {
            rgb_to_bgra8888(&rgba_image, AlphaPolicy::Require).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
