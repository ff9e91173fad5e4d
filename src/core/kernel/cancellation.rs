use std::error::Error;
use std::fmt;

/// Returned by cancel-aware kernel entry points when the token fired before
/// the grid was finished. Expected control flow for the caller, not a
/// failure to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render cancelled")
    }
}

impl Error for Cancelled {}

/// Polled once per row by the kernel loops. Implementations must be cheap;
/// the kernel calls this from worker threads.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token for callers that want the plain, run-to-completion kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
