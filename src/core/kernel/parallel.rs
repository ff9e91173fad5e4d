use rayon::prelude::*;

use crate::core::data::iteration_grid::IterationGrid;
use crate::core::kernel::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::kernel::escape::escape_time;
use crate::core::kernel::request::RenderRequest;

/// Row-parallel kernel on rayon's work-stealing pool. Rows are independent,
/// so the grid is bit-identical to the serial path's for the same request.
#[must_use]
pub fn render_parallel(request: &RenderRequest) -> IterationGrid {
    match render_parallel_cancelable(request, &NeverCancel) {
        Ok(grid) => grid,
        Err(Cancelled) => unreachable!("NeverCancel never signals cancellation"),
    }
}

/// Cancel-aware form of [`render_parallel`]. Each worker polls the token at
/// the start of its row and abandons the job early via rayon's fallible
/// collect when any row reports cancellation.
pub fn render_parallel_cancelable<C: CancelToken>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<IterationGrid, Cancelled> {
    let width = request.width();
    let height = request.height();
    let max_iterations = request.max_iterations();

    let rows: Result<Vec<Vec<u32>>, Cancelled> = (0..height)
        .into_par_iter()
        .map(|py| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let mut row = Vec::with_capacity(width as usize);
            for px in 0..width {
                row.push(escape_time(request.sample(px, py), max_iterations));
            }

            Ok(row)
        })
        .collect();

    let cells: Vec<u32> = rows?.into_iter().flatten().collect();

    Ok(IterationGrid::from_cells(width, height, cells)
        .expect("each of the height rows holds exactly width cells"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::region::Region;
    use crate::core::kernel::serial::render_serial;
    use crate::core::kernel::variant::KernelVariant;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn request(width: u32, height: u32, max_iterations: u32) -> RenderRequest {
        let region = Region::new(-2.5, 1.5, -2.0, 2.0).unwrap();
        RenderRequest::new(width, height, region, max_iterations, KernelVariant::Parallel).unwrap()
    }

    #[test]
    fn matches_the_serial_grid_exactly() {
        let req = request(64, 48, 30);

        assert_eq!(render_parallel(&req), render_serial(&req));
    }

    #[test]
    fn matches_serial_on_a_single_row() {
        let req = request(32, 1, 15);

        assert_eq!(render_parallel(&req), render_serial(&req));
    }

    #[test]
    fn matches_serial_on_a_single_column() {
        let req = request(1, 32, 15);

        assert_eq!(render_parallel(&req), render_serial(&req));
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let req = request(80, 60, 25);

        assert_eq!(render_parallel(&req), render_parallel(&req));
    }

    #[test]
    fn cancelled_token_stops_the_render() {
        let result = render_parallel_cancelable(&request(50, 50, 15), &|| true);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn token_is_polled_once_per_row() {
        let polls = AtomicUsize::new(0);
        let token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = render_parallel_cancelable(&request(4, 16, 10), &token);

        assert!(result.is_ok());
        assert_eq!(polls.load(Ordering::Relaxed), 16);
    }
}
