/// Copy of the signal's state at one point in time.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PiReading {
    pub value: f64,
    pub version: u64,
}

/// Latest π estimate plus a version counter.
///
/// Every [`publish`](PiSignal::publish) bumps the version, so a renderer
/// polling the signal can tell whether anything changed since its last
/// read. Readers only ever get copies.
#[derive(Debug, Default, Clone)]
pub struct PiSignal {
    reading: PiReading,
}

impl PiSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, value: f64) {
        self.reading = PiReading {
            value,
            version: self.reading.version + 1,
        };
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.reading.value
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.reading.version
    }

    #[inline]
    pub fn reading(&self) -> PiReading {
        self.reading
    }

    pub fn changed_since(&self, version: u64) -> bool {
        self.reading.version != version
    }
}
