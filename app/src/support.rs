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
use anyhow::{Context, Result};
use frame_transcode::{EncodedFrame, PixelImage};
use image::{GenericImageView, ImageReader};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Decoded still owning its samples, the stand-in for the accessory capture layer.
pub(crate) struct DecodedStill {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: usize,
}

impl DecodedStill {
    pub(crate) fn as_image(&self) -> PixelImage<'_> {
        PixelImage::new(&self.pixels, self.width, self.height, self.channels)
    }
}

pub(crate) fn decode_still<P: AsRef<Path>>(path: P) -> Result<DecodedStill> {
    let path = path.as_ref();
    let img = ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?;
    let (width, height) = img.dimensions();
    let (pixels, channels) = if img.color().has_alpha() {
        (img.to_rgba8().into_raw(), 4)
    } else {
        (img.to_rgb8().into_raw(), 3)
    };
    Ok(DecodedStill {
        pixels,
        width,
        height,
        channels,
    })
}

pub(crate) fn save_frame<P: AsRef<Path>>(path: P, frame: &EncodedFrame) -> Result<()> {
    let path = path.as_ref();
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(&frame.data)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub(crate) fn describe(frame: &EncodedFrame) -> String {
    let meta = &frame.metadata;
    format!(
        "{} {}x{} stride={} rotation={} traversal={:?} bytes={}",
        meta.format,
        meta.width,
        meta.height,
        meta.stride,
        meta.rotation.degrees(),
        meta.traversal,
        frame.data.len()
    )
}
