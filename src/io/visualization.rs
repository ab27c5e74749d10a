//! GIF playback of a walk's move sequence

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::io::colormap::Colormap;
use crate::io::configuration::{FINAL_FRAME_HOLD_FACTOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, WalkError, create_dir_error, invalid_configuration};
use crate::io::image::Canvas;
use crate::lattice::position::Position;
use crate::lattice::topology::Lattice;
use crate::walk::growth::GrownWalk;
use crate::walk::moves::Move;

/// Frame plan derived from a move sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    /// Delay of each regular frame in milliseconds
    pub delay_ms: u32,
    /// Only every `skip_factor`-th step produces a frame
    pub skip_factor: usize,
}

impl FramePlan {
    /// Plan frames for a requested delay
    ///
    /// Automatically skips frames if the requested frame rate exceeds viewer
    /// capabilities. For example, a 5 ms request with a 20 ms viewer minimum
    /// keeps every 4th step at 20 ms to preserve the apparent speed.
    pub fn new(frame_delay_ms: u32) -> Self {
        let frame_delay_ms = frame_delay_ms.max(1);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };

        Self {
            delay_ms: frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS),
            skip_factor: skip_factor as usize,
        }
    }

    /// Number of frames produced for `step_count` steps plus a final stay
    ///
    /// The start frame and the held final frame are always present.
    pub const fn frame_count(&self, step_count: usize) -> usize {
        let regular = step_count / self.skip_factor;
        let tail = if step_count % self.skip_factor == 0 { 0 } else { 1 };
        1 + regular + tail + 1
    }
}

/// Replays a grown walk move by move into an animated GIF
pub struct WalkAnimation<'a> {
    lattice: &'a Lattice,
    colormap: Colormap,
    plan: FramePlan,
}

impl<'a> WalkAnimation<'a> {
    /// Create an animation of walks on `lattice`
    pub fn new(lattice: &'a Lattice, colormap: Colormap, frame_delay_ms: u32) -> Self {
        Self {
            lattice,
            colormap,
            plan: FramePlan::new(frame_delay_ms),
        }
    }

    /// Frame plan in use
    pub const fn plan(&self) -> FramePlan {
        self.plan
    }

    /// Replay `walk` and export it as a looping GIF
    ///
    /// Each step paints onto the previous frame; the terminal stay repeats the
    /// last frame for `FINAL_FRAME_HOLD_FACTOR` delays.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The walk is empty (`InvalidConfiguration`)
    /// - A move leaves the lattice during replay
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, walk: &GrownWalk, output_path: &Path) -> Result<()> {
        let start = walk
            .start()
            .ok_or_else(|| invalid_configuration("walk", &"empty", &"nothing to animate"))?;
        let mut canvas = Canvas::new(self.lattice)?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| create_dir_error(parent.to_path_buf(), e))?;
        }
        let file = std::fs::File::create(output_path).map_err(|e| WalkError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let encode_error = |e: image::ImageError| WalkError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(encode_error)?;

        let length = walk.len();
        let delay = Delay::from_numer_denom_ms(self.plan.delay_ms, 1);
        canvas.paint_visit(self.lattice, start, self.colormap.color_for_order(1, length));
        encoder
            .encode_frame(Frame::from_parts(canvas.image().clone(), 0, 0, delay))
            .map_err(encode_error)?;

        let mut current = start;
        let mut order = 1u32;
        let mut pending = false;
        for (index, step) in walk.moves.iter().enumerate() {
            match step {
                Move::Step(direction) => {
                    let next = self
                        .lattice
                        .step(current, *direction)
                        .ok_or(WalkError::NonAdjacentStep { index: index + 1 })?;
                    order = order.saturating_add(1);
                    let color = self.colormap.color_for_order(order, length);
                    canvas.paint_step(self.lattice, current, next, color, 1);
                    canvas.paint_visit(self.lattice, next, color);
                    current = next;
                    pending = true;

                    if (order as usize - 1) % self.plan.skip_factor == 0 {
                        encoder
                            .encode_frame(Frame::from_parts(canvas.image().clone(), 0, 0, delay))
                            .map_err(encode_error)?;
                        pending = false;
                    }
                }
                Move::Stay => {
                    if pending {
                        encoder
                            .encode_frame(Frame::from_parts(canvas.image().clone(), 0, 0, delay))
                            .map_err(encode_error)?;
                        pending = false;
                    }
                    let hold = Delay::from_numer_denom_ms(
                        self.plan.delay_ms.saturating_mul(FINAL_FRAME_HOLD_FACTOR),
                        1,
                    );
                    encoder
                        .encode_frame(Frame::from_parts(canvas.image().clone(), 0, 0, hold))
                        .map_err(encode_error)?;
                }
            }
        }

        Ok(())
    }

    /// Positions shown after each move, starting position first
    pub fn replay_positions(&self, walk: &GrownWalk) -> Vec<Position> {
        walk.start()
            .into_iter()
            .chain(
                walk.start()
                    .into_iter()
                    .flat_map(|start| walk.moves.replay(self.lattice, start)),
            )
            .collect()
    }
}
