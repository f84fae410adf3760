use crate::core::points::{Point, Region};

/// Running inside/outside tallies for one sampling run.
///
/// Counters only grow between calls to [`reset`](RunningStats::reset).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunningStats {
    inside_count: u64,
    outside_count: u64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `point` and bumps the matching counter.
    #[inline]
    pub fn record(&mut self, point: &Point) -> Region {
        let region = point.region();
        self.record_region(region);
        region
    }

    #[inline]
    pub fn record_region(&mut self, region: Region) {
        match region {
            Region::Inside => self.inside_count += 1,
            Region::Outside => self.outside_count += 1,
        }
    }

    /// `4 * inside / total`, or `0.0` before anything was recorded.
    #[inline]
    pub fn estimate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        4.0 * self.inside_count as f64 / total as f64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn inside_count(&self) -> u64 {
        self.inside_count
    }

    #[inline]
    pub fn outside_count(&self) -> u64 {
        self.outside_count
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.inside_count + self.outside_count
    }
}
