mod error;
mod samplers;
mod schedulers;
mod simulation;

pub use error::BuildError;

pub use samplers::build_sampler;
pub use schedulers::build_scheduler;
pub use simulation::{BoxedDriver, build_simulation};
