use std::time::Duration;

use crate::render::pixel_buffer::PixelBuffer;

/// A completed render, tagged with the generation of the request that
/// produced it so receivers can discard frames they have already
/// superseded.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub buffer: PixelBuffer,
    pub render_duration: Duration,
}
