use crate::evaluation::EstimateSample;

/// Ordered record of every [`EstimateSample`] taken during a run, used to
/// draw the convergence chart.
#[derive(Debug, Default, Clone)]
pub struct ConvergenceHistory {
    entries: Vec<EstimateSample>,
}

impl ConvergenceHistory {
    pub fn push(&mut self, sample: EstimateSample) {
        self.entries.push(sample)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<EstimateSample> {
        self.entries.last().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }

    pub fn samples(&self) -> &[EstimateSample] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &EstimateSample> {
        self.entries.iter()
    }

    /// `(total_count, pi_estimate)` pairs in chart order.
    pub fn series(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.entries.iter().map(|s| (s.total_count, s.pi_estimate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seen: u64, pi: f64) -> EstimateSample {
        EstimateSample {
            total_count: seen,
            pi_estimate: pi,
        }
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let h = ConvergenceHistory::default();
        assert_eq!(h.len(), 0);
        assert!(h.is_empty());
        assert!(h.latest().is_none());
    }

    #[test]
    fn push_increases_len_and_latest_returns_copy() {
        let mut h = ConvergenceHistory::default();
        h.push(sample(1, 4.0));
        assert_eq!(h.len(), 1);
        assert_eq!(h.latest(), Some(sample(1, 4.0)));

        h.push(sample(2, 2.0));
        assert_eq!(h.len(), 2);
        assert_eq!(h.latest(), Some(sample(2, 2.0)));
    }

    #[test]
    fn series_preserves_order() {
        let mut h = ConvergenceHistory::default();
        h.push(sample(1, 4.0));
        h.push(sample(2, 4.0));
        h.push(sample(3, 8.0 / 3.0));
        let got: Vec<(u64, f64)> = h.series().collect();
        assert_eq!(got, vec![(1, 4.0), (2, 4.0), (3, 8.0 / 3.0)]);
        assert_eq!(h.iter().count(), 3);
        assert_eq!(h.samples()[1], sample(2, 4.0));
    }

    #[test]
    fn clear_empties_history() {
        let mut h = ConvergenceHistory::default();
        h.push(sample(1, 0.0));
        h.clear();
        assert!(h.is_empty());
        assert!(h.latest().is_none());
    }
}
