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
//! Single pixel RGB to YCbCr transform shared by every traversal.
use crate::numerics::{clamp8, descale};
use crate::yuv_support::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Chroma pair of one pixel
pub struct Chroma {
    pub u: u8,
    pub v: u8,
}

#[inline(always)]
/// Computes limited range BT.601 luma of one RGB triplet.
pub fn rgb_to_luma(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    clamp8(descale(Y_R * r + Y_G * g + Y_B * b) + LUMA_OFFSET)
}

#[inline(always)]
/// Computes limited range BT.601 chroma of one RGB triplet.
pub fn rgb_to_chroma(r: u8, g: u8, b: u8) -> Chroma {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let u = clamp8(descale(U_R * r + U_G * g + U_B * b) + CHROMA_OFFSET);
    let v = clamp8(descale(V_R * r + V_G * g + V_B * b) + CHROMA_OFFSET);
    Chroma { u, v }
}
