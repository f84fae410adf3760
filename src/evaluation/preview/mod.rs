mod convergence_history;
mod estimate_sample;

pub use convergence_history::ConvergenceHistory;
pub use estimate_sample::EstimateSample;
