mod animation_driver;
mod frame_observer;
pub mod scheduler;

pub use animation_driver::{AnimationDriver, DriverState};
pub use frame_observer::{FrameObserver, FrameUpdate};
