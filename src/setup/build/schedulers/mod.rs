use crate::setup::build::BuildError;
use crate::setup::choices::SchedulerChoice;
use crate::tasks::scheduler::{FixedRateScheduler, FrameQueue, FrameScheduler};

mod fixed_rate;

pub fn build_scheduler(choice: SchedulerChoice) -> Result<Box<dyn FrameScheduler>, BuildError> {
    match choice {
        SchedulerChoice::FrameQueue(_) => Ok(Box::new(FrameQueue::new())),
        SchedulerChoice::FixedRate(p) => {
            let s = FixedRateScheduler::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
