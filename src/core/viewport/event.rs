use crate::core::viewport::gesture::PixelPosition;

/// Discrete input events the host feeds into the session. The host owns
/// the windowing system; the session only sees this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    LeftPress(PixelPosition),
    LeftRelease,
    RightPress(PixelPosition),
    RightRelease,
    PointerMove(PixelPosition),
    /// Restore the construction-time region and budget.
    Reset,
    BoostIncrease,
    BoostDecrease,
    /// Swap which kernel variant services subsequent recomputes.
    ToggleKernel,
}
