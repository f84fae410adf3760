use crate::core::points::ClassifiedPoint;
use crate::evaluation::EstimateSample;

/// What a tick hands to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    pub point: ClassifiedPoint,
    pub sample: EstimateSample,
}

/// Receives one [`FrameUpdate`] per tick, after all run state is updated.
pub trait FrameObserver {
    fn on_frame(&mut self, update: &FrameUpdate);
}

impl<F: FnMut(&FrameUpdate)> FrameObserver for F {
    fn on_frame(&mut self, update: &FrameUpdate) {
        self(update)
    }
}
