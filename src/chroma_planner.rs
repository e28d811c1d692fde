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
//! Traversal orders and the 4:2:0 chroma emission rule that goes with each of them.
//!
//! A traversal visits the source as a sequence of *lines*, each made of *steps*.
//! [Traversal::Identity] walks rows top to bottom, columns left to right.
//! [Traversal::Rotated90] walks source columns left to right and, inside each column,
//! rows from the bottom up, which lays the samples out as the frame turned a quarter
//! so the viewer sees it upright without transposing anything.

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Order in which source pixels are visited to fill the output planes
pub enum Traversal {
    #[default]
    Identity,
    Rotated90,
}

impl Traversal {
    /// Number of lines and steps per line for a `width` x `height` source.
    #[inline]
    pub const fn extents(&self, width: usize, height: usize) -> (usize, usize) {
        match self {
            Traversal::Identity => (height, width),
            Traversal::Rotated90 => (width, height),
        }
    }

    /// Source `(row, column)` visited at `step` of `line`.
    #[inline(always)]
    pub const fn source_position(&self, line: usize, step: usize, height: usize) -> (usize, usize) {
        match self {
            Traversal::Identity => (line, step),
            Traversal::Rotated90 => (height - 1 - step, line),
        }
    }
}

/// Position of source pixel `(row, col)` inside a luma plane written in `traversal` order.
///
/// Lets callers map a [Traversal::Rotated90] frame back onto source coordinates.
#[inline]
pub const fn luma_index(
    traversal: Traversal,
    width: usize,
    height: usize,
    row: usize,
    col: usize,
) -> usize {
    match traversal {
        Traversal::Identity => row * width + col,
        Traversal::Rotated90 => col * height + (height - 1 - row),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// What to do with a trailing row or column that does not fill a 2x2 block
pub enum ChromaEdgePolicy {
    /// Odd dimensions are rejected before any pixel is processed
    #[default]
    Strict,
    /// Trailing line is encoded for luma only, chroma plane is sized for the even part
    SkipTrailing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Decides where a 4:2:0 chroma pair is emitted
pub struct ChromaPlanner {
    traversal: Traversal,
    lines: usize,
    steps: usize,
}

impl ChromaPlanner {
    pub fn new(traversal: Traversal, width: usize, height: usize) -> Self {
        let (lines, steps) = traversal.extents(width, height);
        ChromaPlanner {
            traversal,
            lines,
            steps,
        }
    }

    #[inline]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Steps per line, the luma row length in traversal order.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Every second line, as long as the line below it exists.
    #[inline(always)]
    pub fn line_emits(&self, line: usize) -> bool {
        line & 1 == 0 && line + 1 < self.lines
    }

    /// Every second step of a line.
    ///
    /// Identity samples the first step of each pair. Rotated traversal tests the parity of
    /// `height - row`, that is the second step of each pair, which keeps the blocks aligned
    /// to the rotated frame and never fires on the trailing step of an odd line.
    #[inline(always)]
    pub fn step_emits(&self, step: usize) -> bool {
        match self.traversal {
            Traversal::Identity => step & 1 == 0 && step + 1 < self.steps,
            Traversal::Rotated90 => {
                let row = self.steps - 1 - step;
                (self.steps - row) & 1 == 0
            }
        }
    }

    #[inline(always)]
    pub fn emits_chroma(&self, line: usize, step: usize) -> bool {
        self.line_emits(line) && self.step_emits(step)
    }

    /// Bytes of VU written for one emitting line.
    #[inline]
    pub fn chroma_row_len(&self) -> usize {
        (self.steps / 2) * 2
    }

    /// Total VU plane length.
    #[inline]
    pub fn chroma_len(&self) -> usize {
        (self.lines / 2) * self.chroma_row_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(planner: &ChromaPlanner) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for line in 0..planner.lines() {
            for step in 0..planner.steps() {
                if planner.emits_chroma(line, step) {
                    positions.push((line, step));
                }
            }
        }
        positions
    }

    #[test]
    fn test_identity_emits_on_even_rows_and_columns() {
        let planner = ChromaPlanner::new(Traversal::Identity, 4, 4);
        assert_eq!(emitted(&planner), vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
        assert_eq!(planner.chroma_len(), 8);
    }

    #[test]
    fn test_rotated_emits_on_even_columns_and_even_height_minus_row() {
        let width = 4;
        let height = 6;
        let planner = ChromaPlanner::new(Traversal::Rotated90, width, height);
        for (line, step) in emitted(&planner) {
            let (row, col) = Traversal::Rotated90.source_position(line, step, height);
            assert_eq!(col % 2, 0);
            assert_eq!((height - row) % 2, 0);
        }
        assert_eq!(emitted(&planner).len() * 2, planner.chroma_len());
        assert_eq!(planner.chroma_len(), width * height / 2);
    }

    #[test]
    fn test_one_pair_per_complete_block() {
        for traversal in [Traversal::Identity, Traversal::Rotated90] {
            for (width, height) in [(2, 2), (6, 4), (5, 4), (4, 7), (7, 9), (3, 2)] {
                let planner = ChromaPlanner::new(traversal, width, height);
                let expected = (width / 2) * (height / 2);
                assert_eq!(
                    emitted(&planner).len(),
                    expected,
                    "{traversal:?} {width}x{height}"
                );
                assert_eq!(planner.chroma_len(), expected * 2);
            }
        }
    }

    #[test]
    fn test_trailing_lines_never_emit() {
        let planner = ChromaPlanner::new(Traversal::Rotated90, 5, 3);
        // source column 4 and source row 0 have no partner
        for step in 0..planner.steps() {
            assert!(!planner.emits_chroma(4, step));
        }
        for line in 0..planner.lines() {
            assert!(!planner.emits_chroma(line, 2));
        }
    }

    #[test]
    fn test_rotated_source_positions_walk_columns_bottom_up() {
        let height = 3;
        let visited: Vec<(usize, usize)> = (0..2)
            .flat_map(|line| {
                (0..height).map(move |step| Traversal::Rotated90.source_position(line, step, height))
            })
            .collect();
        assert_eq!(
            visited,
            vec![(2, 0), (1, 0), (0, 0), (2, 1), (1, 1), (0, 1)]
        );
    }

    #[test]
    fn test_luma_index_matches_visit_order() {
        let (width, height) = (4, 6);
        for traversal in [Traversal::Identity, Traversal::Rotated90] {
            let (lines, steps) = traversal.extents(width, height);
            for line in 0..lines {
                for step in 0..steps {
                    let (row, col) = traversal.source_position(line, step, height);
                    assert_eq!(
                        luma_index(traversal, width, height, row, col),
                        line * steps + step
                    );
                }
            }
        }
    }
}
