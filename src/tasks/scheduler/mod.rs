mod fixed_rate_scheduler;
mod frame_queue;
mod frame_scheduler;

pub use fixed_rate_scheduler::{DEFAULT_FRAMES_PER_SECOND, FixedRateScheduler};
pub use frame_queue::FrameQueue;
pub use frame_scheduler::{FrameHandle, FrameScheduler};
