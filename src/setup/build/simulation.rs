use tracing::debug;

use crate::setup::build::{BuildError, build_sampler, build_scheduler};
use crate::setup::choices::SimulationConfig;
use crate::streams::Stream;
use crate::tasks::AnimationDriver;
use crate::tasks::scheduler::FrameScheduler;

/// Driver assembled from configuration, with both seams boxed.
pub type BoxedDriver = AnimationDriver<Box<dyn Stream>, Box<dyn FrameScheduler>>;

pub fn build_simulation(config: SimulationConfig) -> Result<BoxedDriver, BuildError> {
    debug!(?config, "building simulation");
    let sampler = build_sampler(config.sampler)?;
    let scheduler = build_scheduler(config.scheduler)?;
    Ok(AnimationDriver::new(sampler, scheduler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::choices::{
        FixedRateParameters, NoSchedulerParams, SamplerChoice, SchedulerChoice,
        UniformSquareParameters,
    };
    use crate::tasks::DriverState;

    fn queue_config(seed: u64, max_points: Option<u64>) -> SimulationConfig {
        SimulationConfig {
            sampler: SamplerChoice::UniformSquare(UniformSquareParameters {
                seed: Some(seed),
                max_points,
            }),
            scheduler: SchedulerChoice::FrameQueue(NoSchedulerParams {}),
        }
    }

    #[test]
    fn builds_runnable_driver_from_config() {
        let mut d = build_simulation(queue_config(5, None)).unwrap();
        d.start();
        assert_eq!(d.run_frames(99), 99);
        assert_eq!(d.stats().total(), 100);
        assert_eq!(d.history().len(), 100);
    }

    #[test]
    fn same_config_same_run() {
        let mut a = build_simulation(queue_config(77, None)).unwrap();
        let mut b = build_simulation(queue_config(77, None)).unwrap();
        a.start();
        b.start();
        a.run_frames(200);
        b.run_frames(200);
        assert_eq!(a.history().samples(), b.history().samples());
    }

    #[test]
    fn bounded_sampler_finishes_the_run() {
        let mut d = build_simulation(queue_config(1, Some(10))).unwrap();
        d.start();
        assert_eq!(d.run_frames(100), 9);
        assert_eq!(d.state(), DriverState::Idle);
        assert_eq!(d.stats().total(), 10);
    }

    #[test]
    fn fixed_rate_driver_paces_frames() {
        let config = SimulationConfig {
            sampler: SamplerChoice::UniformSquare(UniformSquareParameters {
                seed: Some(3),
                max_points: None,
            }),
            scheduler: SchedulerChoice::FixedRate(FixedRateParameters {
                frames_per_second: 1000.0,
            }),
        };
        let mut d = build_simulation(config).unwrap();
        d.start();
        assert_eq!(d.run_frames(5), 5);
        d.stop();
        assert!(!d.scheduler().has_pending());
        assert!(!d.pump());
    }

    #[test]
    fn invalid_scheduler_rate_fails_build() {
        let config = SimulationConfig {
            scheduler: SchedulerChoice::FixedRate(FixedRateParameters {
                frames_per_second: 0.0,
            }),
            ..SimulationConfig::default()
        };
        let err = build_simulation(config).err().unwrap();
        assert!(matches!(err, BuildError::InvalidParameter(_)));
    }

    #[test]
    fn builds_from_json_text() {
        let config = SimulationConfig::from_json_str(
            r#"{"sampler": {"type": "uniform-square", "params": {"seed": 42}},
                "scheduler": {"type": "frame-queue", "params": {}}}"#,
        )
        .unwrap();
        let mut d = build_simulation(config).unwrap();
        d.start();
        d.run_frames(9);
        assert_eq!(d.points().len(), 10);
    }
}
