use std::f64::consts::PI;
use std::fmt::{Display, Formatter, Result};

/// One observation of the running estimate, taken once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EstimateSample {
    pub total_count: u64,
    pub pi_estimate: f64,
}

impl EstimateSample {
    pub fn absolute_error(&self) -> f64 {
        (self.pi_estimate - PI).abs()
    }
}

impl Display for EstimateSample {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, pi={:.6}, err={:.6}",
            self.total_count,
            self.pi_estimate,
            self.absolute_error()
        )
    }
}
