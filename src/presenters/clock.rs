use crate::controllers::render::ports::tick_scheduler::{
    ScheduledTick, TickAction, TickCallback, TickScheduler,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

struct ClockEntry {
    period: Duration,
    next_due: Instant,
    armed: Arc<AtomicBool>,
    callback: TickCallback,
}

#[derive(Default)]
struct ClockState {
    entries: Vec<ClockEntry>,
}

/// Cooperative interval scheduler.
///
/// Nothing runs on its own: the owner calls [`TickClock::run_due`] from its
/// event loop and sleeps until [`TickClock::next_deadline`]. Clones share the
/// same schedule.
#[derive(Clone, Default)]
pub struct TickClock {
    state: Arc<Mutex<ClockState>>,
}

struct ClockHandle {
    armed: Arc<AtomicBool>,
}

impl ScheduledTick for ClockHandle {
    fn cancel(&mut self) {
        self.armed.store(false, Ordering::Release);
    }

    fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}

impl TickClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every armed callback whose deadline has passed and returns how
    /// many ran. Callbacks that return [`TickAction::Stop`] are dropped;
    /// the rest are rescheduled one period after `now`. Callbacks run with
    /// the schedule locked and must not schedule on the same clock.
    pub fn run_due(&self, now: Instant) -> usize {
        let mut state = self.lock();
        let mut ran = 0;

        state.entries.retain_mut(|entry| {
            if !entry.armed.load(Ordering::Acquire) {
                return false;
            }

            if entry.next_due > now {
                return true;
            }

            ran += 1;

            match (entry.callback)() {
                TickAction::Continue => {
                    entry.next_due = now + entry.period;
                    true
                }
                TickAction::Stop => {
                    entry.armed.store(false, Ordering::Release);
                    false
                }
            }
        });

        ran
    }

    /// Earliest deadline among armed callbacks.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.armed.load(Ordering::Acquire))
            .map(|entry| entry.next_due)
            .min()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.armed.load(Ordering::Acquire))
            .count()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TickScheduler for TickClock {
    fn schedule_interval(&self, period: Duration, callback: TickCallback) -> Box<dyn ScheduledTick> {
        let armed = Arc::new(AtomicBool::new(true));

        self.lock().entries.push(ClockEntry {
            period,
            next_due: Instant::now() + period,
            armed: Arc::clone(&armed),
            callback,
        });

        Box::new(ClockHandle { armed })
    }
}
