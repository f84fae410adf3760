/// Ticket for one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub(crate) u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host clock that fires one callback per requested frame.
///
/// Models a display refresh scheduler: a frame is requested, later fires
/// exactly once, and may be withdrawn before it fires.
pub trait FrameScheduler {
    /// Requests a frame and returns its handle.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraws a pending frame.
    ///
    /// Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Host side: fires the next due frame.
    ///
    /// Time-based schedulers wait until the frame is due. Returns `None`
    /// when nothing is pending.
    fn next_frame(&mut self) -> Option<FrameHandle>;

    /// Whether any requested frame has not yet fired.
    fn has_pending(&self) -> bool;
}

impl<F: FrameScheduler + ?Sized> FrameScheduler for Box<F> {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }

    fn next_frame(&mut self) -> Option<FrameHandle> {
        (**self).next_frame()
    }

    fn has_pending(&self) -> bool {
        (**self).has_pending()
    }
}
