//! Escape-time kernel: turns a validated [`RenderRequest`] into an
//! [`IterationGrid`](crate::core::data::iteration_grid::IterationGrid).
//!
//! The kernel is stateless and deterministic. All input validation happens
//! at [`RenderRequest`] and [`Region`](crate::core::data::region::Region)
//! construction, so computation itself cannot fail, only be cancelled.

pub mod cancellation;
pub mod escape;
pub mod parallel;
pub mod request;
pub mod serial;
pub mod variant;

use crate::core::data::iteration_grid::IterationGrid;
use cancellation::{CancelToken, Cancelled};
use request::RenderRequest;
use variant::KernelVariant;

/// Computes the escape-time grid for `request`, dispatching to the variant
/// the request selects.
#[must_use]
pub fn compute_grid(request: &RenderRequest) -> IterationGrid {
    match request.variant() {
        KernelVariant::Serial => serial::render_serial(request),
        KernelVariant::Parallel => parallel::render_parallel(request),
    }
}

/// Cancel-aware form of [`compute_grid`].
pub fn compute_grid_cancelable<C: CancelToken>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<IterationGrid, Cancelled> {
    match request.variant() {
        KernelVariant::Serial => serial::render_serial_cancelable(request, cancel),
        KernelVariant::Parallel => parallel::render_parallel_cancelable(request, cancel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::region::Region;

    #[test]
    fn dispatch_honours_the_requested_variant() {
        let region = Region::new(-2.5, 1.5, -2.0, 2.0).unwrap();
        let serial =
            RenderRequest::new(40, 40, region, 15, KernelVariant::Serial).unwrap();
        let parallel =
            RenderRequest::new(40, 40, region, 15, KernelVariant::Parallel).unwrap();

        // both paths observe the same per-pixel contract
        assert_eq!(compute_grid(&serial), compute_grid(&parallel));
    }

    #[test]
    fn cancelable_dispatch_completes_with_a_quiet_token() {
        let region = Region::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let request = RenderRequest::new(8, 8, region, 10, KernelVariant::Parallel).unwrap();

        let grid = compute_grid_cancelable(&request, &cancellation::NeverCancel).unwrap();
        assert_eq!(grid, compute_grid(&request));
    }
}
