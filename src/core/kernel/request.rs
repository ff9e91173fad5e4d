use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::region::Region;
use crate::core::kernel::variant::KernelVariant;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderRequestError {
    InvalidDimension { width: u32, height: u32 },
    IterationBudgetOutOfRange { max_iterations: u32 },
}

impl fmt::Display for RenderRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "pixel dimensions must be positive: {}x{}", width, height)
            }
            Self::IterationBudgetOutOfRange { max_iterations } => {
                write!(
                    f,
                    "iteration budget must be at least 1, got {}",
                    max_iterations
                )
            }
        }
    }
}

impl Error for RenderRequestError {}

/// Everything a kernel invocation needs: pixel dimensions, the region of
/// the complex plane they map onto, the iteration budget, and which kernel
/// path to use. Validated on construction so the kernel itself never has
/// to fail.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    width: u32,
    height: u32,
    region: Region,
    max_iterations: u32,
    variant: KernelVariant,
}

impl RenderRequest {
    pub fn new(
        width: u32,
        height: u32,
        region: Region,
        max_iterations: u32,
        variant: KernelVariant,
    ) -> Result<Self, RenderRequestError> {
        if width == 0 || height == 0 {
            return Err(RenderRequestError::InvalidDimension { width, height });
        }

        if max_iterations == 0 {
            return Err(RenderRequestError::IterationBudgetOutOfRange { max_iterations });
        }

        Ok(Self {
            width,
            height,
            region,
            max_iterations,
            variant,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn variant(&self) -> KernelVariant {
        self.variant
    }

    /// Complex sample for pixel `(px, py)`: linear interpolation across the
    /// pixel index range, left-closed (pixel 0 sits on the minimum bound,
    /// pixel `w` would sit on the maximum).
    #[must_use]
    pub fn sample(&self, px: u32, py: u32) -> Complex {
        let region = self.region;

        Complex::new(
            region.x_min() + px as f64 * region.width() / self.width as f64,
            region.y_min() + py as f64 * region.height() / self.height as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_region() -> Region {
        Region::new(-2.5, 1.5, -2.0, 2.0).unwrap()
    }

    #[test]
    fn zero_width_is_rejected() {
        let result = RenderRequest::new(0, 100, test_region(), 15, KernelVariant::Serial);

        assert_eq!(
            result,
            Err(RenderRequestError::InvalidDimension {
                width: 0,
                height: 100
            })
        );
    }

    #[test]
    fn zero_height_is_rejected() {
        let result = RenderRequest::new(100, 0, test_region(), 15, KernelVariant::Serial);

        assert_eq!(
            result,
            Err(RenderRequestError::InvalidDimension {
                width: 100,
                height: 0
            })
        );
    }

    #[test]
    fn zero_iteration_budget_is_rejected() {
        let result = RenderRequest::new(100, 100, test_region(), 0, KernelVariant::Serial);

        assert_eq!(
            result,
            Err(RenderRequestError::IterationBudgetOutOfRange { max_iterations: 0 })
        );
    }

    #[test]
    fn sample_maps_pixel_zero_to_minimum_bounds() {
        let request =
            RenderRequest::new(100, 100, test_region(), 15, KernelVariant::Serial).unwrap();
        let c = request.sample(0, 0);

        assert_eq!(c.re, -2.5);
        assert_eq!(c.im, -2.0);
    }

    #[test]
    fn sample_interpolates_linearly_over_the_index_range() {
        let request =
            RenderRequest::new(100, 100, test_region(), 15, KernelVariant::Serial).unwrap();

        // half way across a symmetric axis lands exactly on the center
        let c = request.sample(50, 50);
        assert_eq!(c.re, -0.5);
        assert_eq!(c.im, 0.0);
    }

    #[test]
    fn sample_is_left_closed() {
        // the maximum bound itself is never sampled: pixel w-1 stops one
        // step short of x_max
        let request =
            RenderRequest::new(4, 4, Region::new(0.0, 4.0, 0.0, 4.0).unwrap(), 15, KernelVariant::Serial)
                .unwrap();

        assert_eq!(request.sample(3, 0).re, 3.0);
        assert_eq!(request.sample(0, 3).im, 3.0);
    }
}
