/// Custom user events for the GUI event loop.
#[derive(Debug, Clone, Copy)]
pub enum GuiEvent {
    /// A new frame is waiting in the sink; the handler should request a
    /// redraw.
    Wake,
}
