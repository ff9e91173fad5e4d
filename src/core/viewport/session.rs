use crate::core::data::region::{Region, RegionError};
use crate::core::kernel::request::{RenderRequest, RenderRequestError};
use crate::core::kernel::variant::KernelVariant;
use crate::core::viewport::budget::IterationBudget;
use crate::core::viewport::event::InputEvent;
use crate::core::viewport::gesture::{Gesture, PixelPosition};

/// Base iteration budget of a freshly constructed session.
pub const DEFAULT_BASE_BUDGET: f64 = 15.0;

// A pointer jump of a full window height or more would push the zoom factor
// to zero and collapse the region; the factor is floored instead.
const MIN_ZOOM_FACTOR: f64 = 1e-6;

/// The classic whole-set view the viewer starts in.
#[must_use]
pub fn default_region() -> Region {
    Region::new(-2.5, 1.5, -2.0, 2.0).expect("default view region is valid")
}

/// Interaction state for one viewer window: the current region and budget,
/// the in-progress gesture, and the kernel variant for recomputes.
///
/// Events arrive one at a time from the host's event loop; the session is
/// not meant for concurrent mutation and carries no internal locking.
/// Each event that changes the region or budget
/// yields exactly one [`RenderRequest`] for the host to hand to
/// [`compute_grid`](crate::core::kernel::compute_grid).
#[derive(Debug, Clone)]
pub struct ViewportSession {
    width: u32,
    height: u32,
    initial_region: Region,
    initial_budget: IterationBudget,
    region: Region,
    budget: IterationBudget,
    gesture: Gesture,
    variant: KernelVariant,
}

impl ViewportSession {
    /// Constructs a session for a `width`×`height` window. Validation goes
    /// through [`RenderRequest`], so a session that constructs successfully
    /// can always produce valid recompute requests.
    pub fn new(
        width: u32,
        height: u32,
        region: Region,
        base_budget: f64,
        variant: KernelVariant,
    ) -> Result<Self, RenderRequestError> {
        let budget = IterationBudget::new(base_budget);
        RenderRequest::new(width, height, region, budget.effective(), variant)?;

        Ok(Self {
            width,
            height,
            initial_region: region,
            initial_budget: budget,
            region,
            budget,
            gesture: Gesture::Idle,
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
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[must_use]
    pub fn variant(&self) -> KernelVariant {
        self.variant
    }

    /// Snapshot of the current view as a kernel request, e.g. for the first
    /// frame before any input arrived.
    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest::new(
            self.width,
            self.height,
            self.region,
            self.budget.effective(),
            self.variant,
        )
        .expect("session state stays within kernel preconditions")
    }

    /// Applies one input event. Returns a request when the event changed
    /// the region or the budget, `None` otherwise.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<RenderRequest> {
        match event {
            InputEvent::LeftPress(pos) => {
                if self.gesture == Gesture::Idle {
                    self.gesture = Gesture::PanDragging(pos);
                }
                None
            }
            InputEvent::LeftRelease => {
                if matches!(self.gesture, Gesture::PanDragging(_)) {
                    self.gesture = Gesture::Idle;
                }
                None
            }
            InputEvent::RightPress(pos) => {
                if self.gesture == Gesture::Idle {
                    self.gesture = Gesture::ZoomDragging(pos);
                }
                None
            }
            InputEvent::RightRelease => {
                if matches!(self.gesture, Gesture::ZoomDragging(_)) {
                    self.gesture = Gesture::Idle;
                }
                None
            }
            InputEvent::PointerMove(pos) => match self.gesture {
                Gesture::PanDragging(anchor) => self.pan_towards(anchor, pos),
                Gesture::ZoomDragging(anchor) => self.zoom_towards(anchor, pos),
                Gesture::Idle => None,
            },
            InputEvent::Reset => {
                self.region = self.initial_region;
                self.budget = self.initial_budget;
                self.gesture = Gesture::Idle;
                Some(self.render_request())
            }
            InputEvent::BoostIncrease => {
                self.budget.increase_boost();
                Some(self.render_request())
            }
            InputEvent::BoostDecrease => {
                self.budget.decrease_boost();
                Some(self.render_request())
            }
            InputEvent::ToggleKernel => {
                self.variant = self.variant.toggled();
                None
            }
        }
    }

    /// Shifts the view so the content follows the drag: the bounds move by
    /// the anchor-to-pointer delta scaled from pixels into region units.
    fn pan_towards(&mut self, anchor: PixelPosition, pos: PixelPosition) -> Option<RenderRequest> {
        let dx = (anchor.x - pos.x) * self.region.width() / self.width as f64;
        let dy = (anchor.y - pos.y) * self.region.height() / self.height as f64;

        self.region = self.region.translated(dx, dy);
        self.gesture = Gesture::PanDragging(pos);

        Some(self.render_request())
    }

    /// Rescales the view around its center. The vertical drag distance sets
    /// the radius multiplier, and the iteration base follows the new radius.
    fn zoom_towards(&mut self, anchor: PixelPosition, pos: PixelPosition) -> Option<RenderRequest> {
        let factor =
            (1.0 - (anchor.y - pos.y) / self.height as f64).max(MIN_ZOOM_FACTOR);
        self.gesture = Gesture::ZoomDragging(pos);

        match self.region.zoomed(factor) {
            Ok(region) => {
                self.region = region;
                self.budget.rescale_for_radius(region.width() / 2.0);
                Some(self.render_request())
            }
            // zooming past f64 resolution would collapse the bounds; hold
            // the current view
            Err(RegionError::Degenerate { .. }) => None,
        }
    }
}
