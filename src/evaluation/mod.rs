mod pi_signal;
mod point_cloud;
mod preview;
mod stats;

pub use pi_signal::{PiReading, PiSignal};
pub use point_cloud::PointCloud;
pub use preview::{ConvergenceHistory, EstimateSample};
pub use stats::RunningStats;
