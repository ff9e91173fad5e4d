use std::io::Write;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::render::pixel_buffer::PixelBuffer;

/// Writes frames as binary PPM (`P6`) files.
#[derive(Debug, Default)]
pub struct PpmPresenter {}

impl PpmPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmPresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;

        // P6 header: binary RGB, then width, height and the colour maximum
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.bytes())?;

        Ok(())
    }
}
