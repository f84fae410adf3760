use crate::core::points::{ClassifiedPoint, Point, Region};

/// Points drawn during the current run, one list per region, in draw order.
#[derive(Debug, Default, Clone)]
pub struct PointCloud {
    inside: Vec<Point>,
    outside: Vec<Point>,
}

impl PointCloud {
    pub fn push(&mut self, classified: ClassifiedPoint) {
        match classified.region {
            Region::Inside => self.inside.push(classified.point),
            Region::Outside => self.outside.push(classified.point),
        }
    }

    pub fn points(&self, region: Region) -> &[Point] {
        match region {
            Region::Inside => &self.inside,
            Region::Outside => &self.outside,
        }
    }

    pub fn inside(&self) -> &[Point] {
        &self.inside
    }

    pub fn outside(&self) -> &[Point] {
        &self.outside
    }

    pub fn len(&self) -> usize {
        self.inside.len() + self.outside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.inside.clear();
        self.outside.clear();
    }
}
