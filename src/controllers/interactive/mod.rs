//! Interactive rendering: a background worker that services recompute
//! requests with a latest-wins policy and delivers frames through the
//! [`FrameSink`] port.

pub mod frame;
pub mod ports;
pub mod scheduler;

pub use frame::FrameData;
pub use ports::FrameSink;
pub use scheduler::{RenderJob, RenderScheduler};
