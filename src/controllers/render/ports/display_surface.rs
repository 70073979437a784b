use crate::core::data::frame_buffer::FrameSnapshot;

pub trait DisplaySurface: Send + Sync {
    /// Current drawable size in pixels, read when a render session starts.
    fn size(&self) -> (u32, u32);

    fn present(&self, frame: &FrameSnapshot);
}
