use std::thread;
use std::time::{Duration, Instant};

use crate::tasks::scheduler::{FrameHandle, FrameScheduler};

pub const DEFAULT_FRAMES_PER_SECOND: f64 = 60.0;

/// Timer-backed scheduler that fires at most one frame per interval.
///
/// At most one frame is pending at a time; requesting again replaces the
/// previous request. The first frame is due immediately, later ones one
/// interval after the previous firing.
#[derive(Debug)]
pub struct FixedRateScheduler {
    interval: Duration,
    pending: Option<(FrameHandle, Instant)>,
    last_fired: Option<Instant>,
    next_id: u64,
}

impl FixedRateScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            last_fired: None,
            next_id: 0,
        }
    }

    /// `None` unless `frames_per_second` is finite, positive and gives a
    /// representable interval.
    pub fn with_frames_per_second(frames_per_second: f64) -> Option<Self> {
        if !frames_per_second.is_finite() || frames_per_second <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(1.0 / frames_per_second)
            .ok()
            .map(Self::new)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedRateScheduler {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(1.0 / DEFAULT_FRAMES_PER_SECOND))
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        let due = self
            .last_fired
            .map_or_else(Instant::now, |t| t + self.interval);
        self.pending = Some((handle, due));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.map(|(h, _)| h) == Some(handle) {
            self.pending = None;
        }
    }

    fn next_frame(&mut self) -> Option<FrameHandle> {
        let (handle, due) = self.pending.take()?;
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        self.last_fired = Some(Instant::now());
        Some(handle)
    }

    fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
