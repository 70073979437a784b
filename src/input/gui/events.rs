/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A frame was parked in the pixels adapter and should be drawn.
    Wake,
}
