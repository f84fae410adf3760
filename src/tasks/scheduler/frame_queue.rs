use std::collections::VecDeque;

use crate::tasks::scheduler::{FrameHandle, FrameScheduler};

/// Manually pumped scheduler: requested frames fire in FIFO order as soon
/// as the host polls for them.
///
/// Fits hosts that own the real refresh callback and forward each one, and
/// deterministic tests.
#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: VecDeque<FrameHandle>,
    next_id: u64,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }

    fn next_frame(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_request_order() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        let b = q.request_frame();
        assert_ne!(a, b);
        assert_eq!(q.pending_len(), 2);
        assert_eq!(q.next_frame(), Some(a));
        assert_eq!(q.next_frame(), Some(b));
        assert_eq!(q.next_frame(), None);
        assert!(!q.has_pending());
    }

    #[test]
    fn cancel_withdraws_only_that_frame() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        let b = q.request_frame();
        q.cancel_frame(a);
        assert_eq!(q.next_frame(), Some(b));
        assert!(q.next_frame().is_none());
    }

    #[test]
    fn cancel_unknown_or_fired_is_noop() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        assert_eq!(q.next_frame(), Some(a));
        q.cancel_frame(a);
        q.cancel_frame(FrameHandle(999));
        assert_eq!(q.pending_len(), 0);
    }

    #[test]
    fn handles_are_never_reused() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        q.cancel_frame(a);
        let b = q.request_frame();
        assert!(b.id() > a.id());
    }
}
