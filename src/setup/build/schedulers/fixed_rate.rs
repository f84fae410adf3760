use crate::setup::{build::BuildError, choices::FixedRateParameters};
use crate::tasks::scheduler::FixedRateScheduler;

impl TryFrom<FixedRateParameters> for FixedRateScheduler {
    type Error = BuildError;

    fn try_from(parameters: FixedRateParameters) -> Result<Self, Self::Error> {
        FixedRateScheduler::with_frames_per_second(parameters.frames_per_second).ok_or_else(|| {
            BuildError::InvalidParameter(format!(
                "frames_per_second must be a positive finite rate, got {}",
                parameters.frames_per_second
            ))
        })
    }
}
