use crate::core::data::iteration_grid::IterationGrid;
use crate::core::kernel::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::kernel::escape::escape_time;
use crate::core::kernel::request::RenderRequest;

/// Reference kernel: one pixel at a time, row by row.
#[must_use]
pub fn render_serial(request: &RenderRequest) -> IterationGrid {
    match render_serial_cancelable(request, &NeverCancel) {
        Ok(grid) => grid,
        Err(Cancelled) => unreachable!("NeverCancel never signals cancellation"),
    }
}

/// Cancel-aware form of [`render_serial`]. The token is polled at the start
/// of every row.
pub fn render_serial_cancelable<C: CancelToken>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<IterationGrid, Cancelled> {
    let width = request.width();
    let height = request.height();
    let max_iterations = request.max_iterations();
    let mut cells = Vec::with_capacity(width as usize * height as usize);

    for py in 0..height {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        for px in 0..width {
            cells.push(escape_time(request.sample(px, py), max_iterations));
        }
    }

    Ok(IterationGrid::from_cells(width, height, cells)
        .expect("row loop produces exactly width * height cells"))
}
