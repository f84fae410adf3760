use strum_macros::{Display, IntoStaticStr};

/// Where a sample landed relative to the inscribed circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Region {
    Inside,
    Outside,
}

impl Region {
    #[inline]
    pub fn is_inside(self) -> bool {
        matches!(self, Region::Inside)
    }
}
