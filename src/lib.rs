pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;
pub mod render;

pub use crate::controllers::offline::OfflineRenderer;
pub use crate::core::kernel::request::RenderRequest;
pub use crate::core::kernel::variant::KernelVariant;
pub use crate::core::viewport::session::ViewportSession;
pub use crate::presenters::ppm::PpmPresenter;
