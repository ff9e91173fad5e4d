use crate::core::data::iteration_grid::IterationGrid;
use crate::render::palette::{Colour, Palette};
use crate::render::pixel_buffer::PixelBuffer;

/// Maps an iteration grid to an RGB pixel buffer through a palette.
/// `max_iterations` must be the budget the grid was computed with; cells at
/// that value paint as in-set.
#[must_use]
pub fn rasterize(grid: &IterationGrid, palette: Palette, max_iterations: u32) -> PixelBuffer {
    let mut bytes = Vec::with_capacity(grid.cells().len() * 3);

    for &cell in grid.cells() {
        let Colour { r, g, b } = palette.colour(cell, max_iterations);
        bytes.push(r);
        bytes.push(g);
        bytes.push(b);
    }

    PixelBuffer::from_bytes(grid.width(), grid.height(), bytes)
        .expect("three bytes are pushed per grid cell")
}

/// Copies packed RGB into an RGBA surface, alpha fully opaque. The
/// destination must hold exactly one RGBA pixel per RGB pixel.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 3 == 0,
        "rgb source length {} is not a multiple of 3",
        src.len()
    );
    assert_eq!(
        dst.len(),
        src.len() / 3 * 4,
        "rgba destination does not match source pixel count"
    );

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = 255;
    }
}
