use std::sync::mpsc::Sender;

use tracing::{debug, info, trace};

use crate::evaluation::{
    ConvergenceHistory, EstimateSample, PiReading, PiSignal, PointCloud, RunningStats,
};
use crate::streams::Stream;
use crate::tasks::frame_observer::{FrameObserver, FrameUpdate};
use crate::tasks::scheduler::{FrameHandle, FrameScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Frame-driven sampling loop.
///
/// While running, every fired frame pulls one point from the sampler,
/// records it, appends an [`EstimateSample`] to the history, republishes
/// the estimate and requests the next frame. Everything runs on the caller's
/// thread; a tick completes before the next frame can be delivered.
pub struct AnimationDriver<S: Stream, F: FrameScheduler> {
    sampler: S,
    scheduler: F,

    stats: RunningStats,
    history: ConvergenceHistory,
    cloud: PointCloud,
    signal: PiSignal,

    state: DriverState,
    pending: Option<FrameHandle>,

    observers: Vec<Box<dyn FrameObserver>>,
    progress_tx: Option<Sender<FrameUpdate>>,
}

impl<S: Stream, F: FrameScheduler> AnimationDriver<S, F> {
    pub fn new(sampler: S, scheduler: F) -> Self {
        Self {
            sampler,
            scheduler,
            stats: RunningStats::default(),
            history: ConvergenceHistory::default(),
            cloud: PointCloud::default(),
            signal: PiSignal::default(),
            state: DriverState::Idle,
            pending: None,
            observers: Vec::new(),
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: Sender<FrameUpdate>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn subscribe<O: FrameObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Starts a fresh run. Ignored while already running.
    ///
    /// Clears the counters, history and point cloud, publishes `0.0`, then
    /// runs the first tick right away.
    pub fn start(&mut self) {
        if self.state == DriverState::Running {
            debug!("start ignored, already running");
            return;
        }

        self.state = DriverState::Running;
        self.stats.reset();
        self.history.clear();
        self.cloud.clear();
        self.signal.publish(0.0);
        info!("sampling run started");

        self.tick();
    }

    /// Stops the run and withdraws the pending frame. Ignored while idle.
    ///
    /// Run state stays readable until the next [`start`](Self::start).
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state == DriverState::Idle {
            debug!("stop ignored, already idle");
            return;
        }

        self.state = DriverState::Idle;
        info!(
            total = self.stats.total(),
            estimate = self.stats.estimate(),
            "sampling run stopped"
        );
    }

    /// Delivers a fired frame. Returns whether a point was recorded.
    ///
    /// The handle is withdrawn from the scheduler whichever path delivered
    /// it. Frames other than the one currently pending are stale (fired after
    /// a cancel, or delivered twice) and are dropped.
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        self.scheduler.cancel_frame(handle);
        if self.state != DriverState::Running || self.pending != Some(handle) {
            debug!(frame = handle.id(), "stale frame dropped");
            return false;
        }
        self.pending = None;
        self.tick()
    }

    /// Polls the scheduler for the next due frame and delivers it.
    ///
    /// Returns `false` when no frame was pending.
    pub fn pump(&mut self) -> bool {
        match self.scheduler.next_frame() {
            Some(handle) => {
                self.on_frame(handle);
                true
            }
            None => false,
        }
    }

    /// Pumps up to `frames` frames and returns how many points were recorded.
    pub fn run_frames(&mut self, frames: u64) -> u64 {
        let mut ticks = 0;
        for _ in 0..frames {
            let Some(handle) = self.scheduler.next_frame() else {
                break;
            };
            if self.on_frame(handle) {
                ticks += 1;
            }
        }
        ticks
    }

    fn tick(&mut self) -> bool {
        let Some(point) = self.sampler.next_point() else {
            info!(total = self.stats.total(), "sampler exhausted, run finished");
            self.state = DriverState::Idle;
            return false;
        };

        let classified = point.classify();
        self.stats.record_region(classified.region);
        self.cloud.push(classified);

        let sample = EstimateSample {
            total_count: self.stats.total(),
            pi_estimate: self.stats.estimate(),
        };
        self.history.push(sample);
        self.signal.publish(sample.pi_estimate);
        trace!(
            total = sample.total_count,
            estimate = sample.pi_estimate,
            "tick"
        );

        let update = FrameUpdate {
            point: classified,
            sample,
        };
        for observer in &mut self.observers {
            observer.on_frame(&update);
        }
        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(update);
        }

        self.pending = Some(self.scheduler.request_frame());
        true
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn stats(&self) -> &RunningStats {
        &self.stats
    }

    pub fn estimate(&self) -> f64 {
        self.stats.estimate()
    }

    pub fn history(&self) -> &ConvergenceHistory {
        &self.history
    }

    pub fn points(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn signal(&self) -> PiReading {
        self.signal.reading()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}
