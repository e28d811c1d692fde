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
mod support;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use frame_transcode::{
    transcode, AlphaPolicy, ChromaEdgePolicy, PixelFormat, Rotation, RotationStrategy,
    TranscodeOptions,
};
use std::path::PathBuf;
use std::time::Instant;
use support::{decode_still, describe, save_frame};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatArg {
    Nv21,
    Bgra8888,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RotationArg {
    Identity,
    Ccw90,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StrategyArg {
    Describe,
    Traverse,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum EdgeArg {
    Strict,
    SkipTrailing,
}

/// Decodes a still and transcodes it the way the detector side expects it.
#[derive(Parser, Debug)]
#[command(name = "transcode")]
struct Args {
    /// Decoded still to transcode, anything `image` can read
    input: PathBuf,

    /// Raw output file, defaults to the input path with the format as extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "nv21")]
    format: FormatArg,

    #[arg(short, long, value_enum, default_value = "identity")]
    rotation: RotationArg,

    #[arg(short, long, value_enum, default_value = "describe")]
    strategy: StrategyArg,

    #[arg(short, long, value_enum, default_value = "strict")]
    edge: EdgeArg,

    /// Fail on sources without alpha instead of expanding them, BGRA8888 only
    #[arg(long)]
    require_alpha: bool,
}

impl Args {
    fn options(&self) -> TranscodeOptions {
        let base = match self.format {
            FormatArg::Nv21 => TranscodeOptions::nv21(),
            FormatArg::Bgra8888 => TranscodeOptions::bgra8888(),
        };
        base.with_rotation(match self.rotation {
            RotationArg::Identity => Rotation::Identity,
            RotationArg::Ccw90 => Rotation::Ccw90,
        })
        .with_strategy(match self.strategy {
            StrategyArg::Describe => RotationStrategy::Describe,
            StrategyArg::Traverse => RotationStrategy::Traverse,
        })
        .with_edge_policy(match self.edge {
            EdgeArg::Strict => ChromaEdgePolicy::Strict,
            EdgeArg::SkipTrailing => ChromaEdgePolicy::SkipTrailing,
        })
        .with_alpha(if self.require_alpha {
            AlphaPolicy::Require
        } else {
            AlphaPolicy::Expand
        })
    }

    fn output_path(&self, format: PixelFormat) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            self.input
                .with_extension(format.name().to_ascii_lowercase())
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let options = args.options();

    let still = decode_still(&args.input)?;
    log::info!(
        "Decoded {} as {}x{} with {} channels",
        args.input.display(),
        still.width,
        still.height,
        still.channels
    );

    let start_time = Instant::now();
    let frame = transcode(&still.as_image(), &options)
        .with_context(|| format!("transcoding {}", args.input.display()))?;
    log::info!("Transcode time: {:?}", start_time.elapsed());

    let output = args.output_path(options.format);
    save_frame(&output, &frame)?;
    log::info!("Wrote {} to {}", describe(&frame), output.display());
    Ok(())
}
