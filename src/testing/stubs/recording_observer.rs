use std::cell::RefCell;
use std::rc::Rc;

use crate::tasks::{FrameObserver, FrameUpdate};

/// Observer that keeps every update it sees; read back through the handle.
pub struct RecordingObserver {
    seen: Rc<RefCell<Vec<FrameUpdate>>>,
}

#[derive(Clone)]
pub struct RecordingHandle {
    seen: Rc<RefCell<Vec<FrameUpdate>>>,
}

impl RecordingObserver {
    pub fn new() -> (Self, RecordingHandle) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                seen: Rc::clone(&seen),
            },
            RecordingHandle { seen },
        )
    }
}

impl FrameObserver for RecordingObserver {
    fn on_frame(&mut self, update: &FrameUpdate) {
        self.seen.borrow_mut().push(*update);
    }
}

impl RecordingHandle {
    pub fn updates(&self) -> Vec<FrameUpdate> {
        self.seen.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.seen.borrow().len()
    }
}
