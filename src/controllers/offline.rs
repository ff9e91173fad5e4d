use std::error::Error;
use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::kernel::compute_grid;
use crate::core::kernel::request::RenderRequest;
use crate::render::palette::Palette;
use crate::render::rasterize::rasterize;

/// One-shot renderer for the CLI: computes a single frame and hands it to
/// the file presenter.
pub struct OfflineRenderer<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> OfflineRenderer<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn render_to_file(
        &self,
        request: &RenderRequest,
        palette: Palette,
        filepath: impl AsRef<Path>,
    ) -> Result<(), Box<dyn Error>> {
        println!("Rendering Mandelbrot set...");
        println!("Image size: {}x{}", request.width(), request.height());
        println!("Max iterations: {}", request.max_iterations());
        println!("Kernel: {}", request.variant().display_name());

        let start = Instant::now();
        let grid = compute_grid(request);
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        let buffer = rasterize(&grid, palette, request.max_iterations());
        self.presenter.present(&buffer, &filepath)?;

        println!("Saved to {}", filepath.as_ref().display());
        Ok(())
    }
}
