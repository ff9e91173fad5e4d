//! Cosmetic presentation of iteration grids: palettes and RGB buffers.
//! Nothing here feeds back into the numeric core.

pub mod palette;
pub mod pixel_buffer;
pub mod rasterize;
