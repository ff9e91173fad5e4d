use std::io;
use std::path::Path;

use crate::render::pixel_buffer::PixelBuffer;

/// Output port for controllers that persist a rendered frame to disk.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()>;
}
