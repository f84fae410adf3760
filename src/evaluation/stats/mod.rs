mod running_stats;

pub use running_stats::RunningStats;
