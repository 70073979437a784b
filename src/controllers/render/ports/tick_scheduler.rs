use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    Continue,
    Stop,
}

pub type TickCallback = Box<dyn FnMut() -> TickAction + Send>;

/// Schedules a callback to run repeatedly at a fixed period until it returns
/// [`TickAction::Stop`] or its handle is cancelled.
pub trait TickScheduler {
    fn schedule_interval(&self, period: Duration, callback: TickCallback) -> Box<dyn ScheduledTick>;
}

pub trait ScheduledTick: Send {
    /// Disarms the callback. Cancelling twice is a no-op.
    fn cancel(&mut self);

    fn is_armed(&self) -> bool;
}
